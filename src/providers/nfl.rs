use reqwest::Client;

use super::FetchOutcome;
use crate::error::FetchError;
use crate::models::upstream::EspnTeamsResponse;
use crate::models::{Player, Sport};

/// How many teams from the ESPN listing get players fabricated for them.
pub const TEAM_LIMIT: usize = 5;

/// Positions fabricated per team, with the id suffix each one gets.
const FABRICATED_POSITIONS: [(&str, &str); 2] = [("QB", "01"), ("RB", "02")];

/// GET the ESPN teams listing and build a QB and an RB for each of the first
/// five teams. Falls back to [`fallback_players`] on any failure.
pub async fn fetch_players(client: &Client, url: &str) -> FetchOutcome {
    FetchOutcome::recover(Sport::Nfl, try_fetch(client, url).await, fallback_players)
}

async fn try_fetch(client: &Client, url: &str) -> Result<Vec<Player>, FetchError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<EspnTeamsResponse>()
        .await?;

    players_from_teams(body)
}

pub(crate) fn players_from_teams(body: EspnTeamsResponse) -> Result<Vec<Player>, FetchError> {
    let league = body
        .sports
        .into_iter()
        .next()
        .ok_or(FetchError::UnexpectedShape("ESPN response has no sports"))?
        .leagues
        .into_iter()
        .next()
        .ok_or(FetchError::UnexpectedShape("ESPN sport has no leagues"))?;

    let players = league
        .teams
        .into_iter()
        .take(TEAM_LIMIT)
        .flat_map(|entry| {
            let team = entry.team;
            FABRICATED_POSITIONS.map(|(position, suffix)| {
                Player::new(
                    Sport::Nfl,
                    format!("{}{}", team.id, suffix),
                    format!("{} {}", position, team.location),
                    team.abbreviation.clone(),
                    position,
                )
            })
        })
        .collect();

    Ok(players)
}

pub fn fallback_players() -> Vec<Player> {
    vec![
        Player::new(Sport::Nfl, 1, "Patrick Mahomes", "KC", "QB"),
        Player::new(Sport::Nfl, 2, "Josh Allen", "BUF", "QB"),
        Player::new(Sport::Nfl, 3, "Christian McCaffrey", "SF", "RB"),
        Player::new(Sport::Nfl, 4, "Tyreek Hill", "MIA", "WR"),
        Player::new(Sport::Nfl, 5, "Travis Kelce", "KC", "TE"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::player_rows;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const FALLBACK_ROWS: [(&str, &str, &str, &str, Sport); 5] = [
        ("nfl-1", "Patrick Mahomes", "KC", "QB", Sport::Nfl),
        ("nfl-2", "Josh Allen", "BUF", "QB", Sport::Nfl),
        ("nfl-3", "Christian McCaffrey", "SF", "RB", Sport::Nfl),
        ("nfl-4", "Tyreek Hill", "MIA", "WR", Sport::Nfl),
        ("nfl-5", "Travis Kelce", "KC", "TE", Sport::Nfl),
    ];

    fn teams_body(count: usize) -> serde_json::Value {
        let teams: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "team": {
                        "id": i.to_string(),
                        "location": format!("City{}", i),
                        "abbreviation": format!("T{}", i),
                        "displayName": "ignored"
                    }
                })
            })
            .collect();
        json!({ "sports": [{ "leagues": [{ "teams": teams }] }] })
    }

    #[tokio::test]
    async fn test_fetch_players_fabricates_two_per_team_for_first_five() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nfl/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_body(8)))
            .mount(&mock_server)
            .await;

        let url = format!("{}/nfl/teams", mock_server.uri());
        let outcome = fetch_players(&Client::new(), &url).await;

        assert!(!outcome.is_fallback());
        let players = outcome.into_players();
        assert_eq!(players.len(), 10);
        assert_eq!(
            players[0],
            Player::new(Sport::Nfl, "101", "QB City1", "T1", "QB")
        );
        assert_eq!(
            players[1],
            Player::new(Sport::Nfl, "102", "RB City1", "T1", "RB")
        );
        assert_eq!(players[9].id, "nfl-502");
        assert_eq!(players[9].name, "RB City5");
    }

    #[tokio::test]
    async fn test_fetch_players_with_fewer_teams_than_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_body(2)))
            .mount(&mock_server)
            .await;

        let outcome = fetch_players(&Client::new(), &mock_server.uri()).await;
        assert_eq!(outcome.players().len(), 4);
    }

    #[tokio::test]
    async fn test_fetch_players_falls_back_on_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let outcome = fetch_players(&Client::new(), &mock_server.uri()).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_players(), fallback_players());
    }

    #[tokio::test]
    async fn test_fetch_players_falls_back_on_shape_change() {
        let mock_server = MockServer::start().await;
        let body = json!({ "sports": [] });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let outcome = fetch_players(&Client::new(), &mock_server.uri()).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_players(), fallback_players());
    }

    #[tokio::test]
    async fn test_fetch_players_falls_back_when_unreachable() {
        let outcome = fetch_players(&Client::new(), "http://127.0.0.1:1/nfl/teams").await;
        assert!(outcome.is_fallback());
        assert_eq!(player_rows(outcome.players()), FALLBACK_ROWS);
    }

    #[test]
    fn test_fallback_players_fixture() {
        assert_eq!(player_rows(&fallback_players()), FALLBACK_ROWS);
    }
}
