//! Player providers: two networked sources with static fallbacks, plus two
//! purely static categories.

use crate::error::FetchError;
use crate::models::{Player, Sport};

pub mod mlb;
pub mod nba;
pub mod nfl;
pub mod nhl;

/// Result of asking a networked provider for players.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Players built from the upstream response.
    Live(Vec<Player>),
    /// Upstream was unusable; these are the provider's fixed sample players.
    Fallback { players: Vec<Player>, reason: String },
}

impl FetchOutcome {
    /// Absorbs a fetch error into fallback data, logging why.
    pub(crate) fn recover(
        sport: Sport,
        result: Result<Vec<Player>, FetchError>,
        fallback: fn() -> Vec<Player>,
    ) -> Self {
        match result {
            Ok(players) => FetchOutcome::Live(players),
            Err(err) => {
                tracing::warn!("Using sample {} data: {}", sport, err);
                FetchOutcome::Fallback {
                    players: fallback(),
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        match self {
            FetchOutcome::Live(players) => players,
            FetchOutcome::Fallback { players, .. } => players,
        }
    }

    pub fn into_players(self) -> Vec<Player> {
        match self {
            FetchOutcome::Live(players) => players,
            FetchOutcome::Fallback { players, .. } => players,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }
}

/// `(id, name, team, position, sport)` rows, for pinning fixture lists in tests.
#[cfg(test)]
pub(crate) fn player_rows(players: &[Player]) -> Vec<(&str, &str, &str, &str, Sport)> {
    players
        .iter()
        .map(|p| {
            (
                p.id.as_str(),
                p.name.as_str(),
                p.team.as_str(),
                p.position.as_str(),
                p.sport,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Player> {
        vec![Player::new(Sport::Nfl, 1, "Sample", "KC", "QB")]
    }

    #[test]
    fn test_recover_keeps_live_players() {
        let live = vec![Player::new(Sport::Nfl, "1201", "QB KC", "KC", "QB")];
        let outcome = FetchOutcome::recover(Sport::Nfl, Ok(live.clone()), sample);
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_players(), live);
    }

    #[test]
    fn test_recover_substitutes_fallback_with_reason() {
        let outcome = FetchOutcome::recover(
            Sport::Nfl,
            Err(FetchError::UnexpectedShape("no sports")),
            sample,
        );
        assert!(outcome.is_fallback());
        assert_eq!(outcome.players(), sample().as_slice());
        match outcome {
            FetchOutcome::Fallback { reason, .. } => assert!(reason.contains("no sports")),
            FetchOutcome::Live(_) => panic!("expected fallback"),
        }
    }
}
