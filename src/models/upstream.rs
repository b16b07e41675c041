//! Response bodies of the third-party player providers.
//!
//! Only the fields we read are declared; everything else is ignored.

use serde::Deserialize;
use std::fmt;

// ESPN: GET /apis/site/v2/sports/football/nfl/teams

#[derive(Debug, Deserialize)]
pub struct EspnTeamsResponse {
    #[serde(default)]
    pub sports: Vec<EspnSport>,
}

#[derive(Debug, Deserialize)]
pub struct EspnSport {
    #[serde(default)]
    pub leagues: Vec<EspnLeague>,
}

#[derive(Debug, Deserialize)]
pub struct EspnLeague {
    #[serde(default)]
    pub teams: Vec<EspnTeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct EspnTeamEntry {
    pub team: EspnTeam,
}

#[derive(Debug, Deserialize)]
pub struct EspnTeam {
    pub id: EspnId,
    pub location: String,
    pub abbreviation: String,
}

/// ESPN sends ids as strings ("12"), but numbers show up in older payloads.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EspnId {
    Text(String),
    Number(i64),
}

impl fmt::Display for EspnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EspnId::Text(id) => f.write_str(id),
            EspnId::Number(id) => write!(f, "{}", id),
        }
    }
}

// balldontlie: GET /api/v1/players?per_page=N

/// Rows are kept raw so one malformed entry does not sink the whole page.
#[derive(Debug, Deserialize)]
pub struct BdlPlayersResponse {
    pub data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct BdlPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<BdlTeam>,
}

#[derive(Debug, Deserialize)]
pub struct BdlTeam {
    pub abbreviation: String,
}
