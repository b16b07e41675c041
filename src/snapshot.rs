use rand::Rng;
use std::collections::HashSet;

use crate::models::{Player, StatsMap};
use crate::stats;

/// Write-once view of everything the API serves.
///
/// Built before the listener starts and shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    players: Vec<Player>,
    stats: StatsMap,
}

impl Snapshot {
    /// Dedupe players by id (first one wins) and synthesize their stats.
    pub fn build<R: Rng + ?Sized>(players: Vec<Player>, rng: &mut R) -> Self {
        let players = dedupe_by_id(players);
        let stats = stats::generate_stats(&players, rng);
        Self { players, stats }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    pub fn total_players(&self) -> usize {
        self.players.len()
    }
}

fn dedupe_by_id(players: Vec<Player>) -> Vec<Player> {
    let mut seen = HashSet::with_capacity(players.len());
    players
        .into_iter()
        .filter(|player| {
            if player.id.is_empty() {
                tracing::warn!("Dropping player with empty id: {}", player.name);
                return false;
            }
            let fresh = seen.insert(player.id.clone());
            if !fresh {
                tracing::warn!("Dropping duplicate player id {}", player.id);
            }
            fresh
        })
        .collect()
}
