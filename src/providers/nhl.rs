use crate::models::{Player, Sport};

/// Fixed NHL sample players. No upstream exists for this category.
pub fn players() -> Vec<Player> {
    vec![
        Player::new(Sport::Nhl, 1, "Connor McDavid", "EDM", "C"),
        Player::new(Sport::Nhl, 2, "Auston Matthews", "TOR", "C"),
        Player::new(Sport::Nhl, 3, "Nathan MacKinnon", "COL", "C"),
    ]
}
