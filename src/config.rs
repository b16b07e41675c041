use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

pub const ESPN_NFL_TEAMS_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";
pub const BALLDONTLIE_PLAYERS_URL: &str = "https://www.balldontlie.io/api/v1/players";

/// Where the two networked providers fetch from.
#[derive(Debug, Clone)]
pub struct Upstreams {
    pub nfl_teams_url: String,
    pub nba_players_url: String,
}

impl Default for Upstreams {
    fn default() -> Self {
        Self {
            nfl_teams_url: ESPN_NFL_TEAMS_URL.to_string(),
            nba_players_url: BALLDONTLIE_PLAYERS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstreams: Upstreams,
}

impl Config {
    /// Build config from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        Ok(Self {
            port,
            upstreams: Upstreams::default(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Unset or blank falls back to 3000.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        }),
    }
}
