use reqwest::Client;

use super::FetchOutcome;
use crate::error::FetchError;
use crate::models::upstream::{BdlPlayer, BdlPlayersResponse};
use crate::models::{Player, Sport};

pub const PAGE_SIZE: u32 = 10;

/// Position used when balldontlie leaves it blank.
pub const DEFAULT_POSITION: &str = "F";

/// GET one page of balldontlie players, skipping anyone without a team.
/// Falls back to [`fallback_players`] on any failure.
pub async fn fetch_players(client: &Client, url: &str) -> FetchOutcome {
    FetchOutcome::recover(Sport::Nba, try_fetch(client, url).await, fallback_players)
}

async fn try_fetch(client: &Client, url: &str) -> Result<Vec<Player>, FetchError> {
    let body = client
        .get(url)
        .query(&[("per_page", PAGE_SIZE)])
        .send()
        .await?
        .error_for_status()?
        .json::<BdlPlayersResponse>()
        .await?;

    players_from_rows(body.data)
}

/// Malformed rows are skipped; a page where every row is malformed is a
/// shape change.
fn players_from_rows(rows: Vec<serde_json::Value>) -> Result<Vec<Player>, FetchError> {
    let total = rows.len();
    let mut parsed = 0;
    let mut players = Vec::with_capacity(total);

    for row in rows {
        match serde_json::from_value::<BdlPlayer>(row) {
            Ok(p) => {
                parsed += 1;
                players.extend(to_player(p));
            }
            Err(err) => tracing::warn!("Skipping malformed NBA player entry: {}", err),
        }
    }

    if total > 0 && parsed == 0 {
        return Err(FetchError::UnexpectedShape("no parseable balldontlie players"));
    }

    Ok(players)
}

fn to_player(p: BdlPlayer) -> Option<Player> {
    let team = p.team?;
    let position = p
        .position
        .filter(|pos| !pos.is_empty())
        .unwrap_or_else(|| DEFAULT_POSITION.to_string());

    Some(Player::new(
        Sport::Nba,
        p.id,
        format!("{} {}", p.first_name, p.last_name),
        team.abbreviation,
        position,
    ))
}

pub fn fallback_players() -> Vec<Player> {
    vec![
        Player::new(Sport::Nba, 1, "LeBron James", "LAL", "F"),
        Player::new(Sport::Nba, 2, "Stephen Curry", "GSW", "G"),
        Player::new(Sport::Nba, 3, "Kevin Durant", "PHX", "F"),
        Player::new(Sport::Nba, 4, "Giannis Antetokounmpo", "MIL", "F"),
        Player::new(Sport::Nba, 5, "Nikola Jokic", "DEN", "C"),
    ]
}
