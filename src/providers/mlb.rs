use crate::models::{Player, Sport};

/// Fixed MLB sample players. No upstream exists for this category.
pub fn players() -> Vec<Player> {
    vec![
        Player::new(Sport::Mlb, 1, "Mike Trout", "LAA", "CF"),
        Player::new(Sport::Mlb, 2, "Mookie Betts", "LAD", "RF"),
        Player::new(Sport::Mlb, 3, "Shohei Ohtani", "LAA", "P"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::player_rows;

    #[test]
    fn test_players_fixture() {
        assert_eq!(
            player_rows(&players()),
            [
                ("mlb-1", "Mike Trout", "LAA", "CF", Sport::Mlb),
                ("mlb-2", "Mookie Betts", "LAD", "RF", Sport::Mlb),
                ("mlb-3", "Shohei Ohtani", "LAA", "P", Sport::Mlb),
            ]
        );
    }
}
