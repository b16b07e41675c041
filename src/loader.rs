use rand::Rng;
use reqwest::Client;

use crate::config::Upstreams;
use crate::models::{Player, Sport};
use crate::providers::{self, FetchOutcome};
use crate::snapshot::Snapshot;

/// How one networked provider fared during startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub sport: Sport,
    pub live: bool,
    pub players: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
    pub total_players: usize,
}

impl LoadReport {
    pub fn degraded(&self) -> bool {
        self.sources.iter().any(|s| !s.live)
    }
}

fn report(sport: Sport, outcome: &FetchOutcome) -> SourceReport {
    SourceReport {
        sport,
        live: !outcome.is_fallback(),
        players: outcome.players().len(),
    }
}

/// Fetch both upstreams concurrently, add the static categories, and
/// synthesize stats once. Provider failures are already absorbed, so this
/// cannot fail.
pub async fn load_snapshot<R: Rng + ?Sized>(
    client: &Client,
    upstreams: &Upstreams,
    rng: &mut R,
) -> (Snapshot, LoadReport) {
    tracing::info!("Loading player data...");

    let (nfl, nba) = tokio::join!(
        providers::nfl::fetch_players(client, &upstreams.nfl_teams_url),
        providers::nba::fetch_players(client, &upstreams.nba_players_url),
    );

    let sources = vec![report(Sport::Nfl, &nfl), report(Sport::Nba, &nba)];

    let mut players: Vec<Player> = nfl.into_players();
    players.extend(nba.into_players());
    players.extend(providers::nhl::players());
    players.extend(providers::mlb::players());

    let snapshot = Snapshot::build(players, rng);
    let report = LoadReport {
        sources,
        total_players: snapshot.total_players(),
    };

    for source in &report.sources {
        let kind = if source.live { "live" } else { "sample" };
        tracing::info!(
            "{} source: {} ({} players)",
            source.sport,
            kind,
            source.players
        );
    }
    tracing::info!("Loaded {} players", report.total_players);

    (snapshot, report)
}
