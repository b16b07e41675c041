use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod upstream;

/// Sport category a player belongs to. Serialized as the league code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "NHL")]
    Nhl,
    #[serde(rename = "MLB")]
    Mlb,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Nhl, Sport::Mlb];

    /// Prefix used in player ids, e.g. `nfl` in `nfl-1`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Sport::Nfl => "nfl",
            Sport::Nba => "nba",
            Sport::Nhl => "nhl",
            Sport::Mlb => "mlb",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Sport::Nfl => "NFL",
            Sport::Nba => "NBA",
            Sport::Nhl => "NHL",
            Sport::Mlb => "MLB",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Player as served by `/api/players`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team: String,
    pub position: String,
    pub sport: Sport,
}

impl Player {
    /// Builds a player whose id is `<sport-prefix>-<source_id>`.
    pub fn new(
        sport: Sport,
        source_id: impl fmt::Display,
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("{}-{}", sport.id_prefix(), source_id),
            name: name.into(),
            team: team.into(),
            position: position.into(),
            sport,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct QuarterbackStats {
    pub passing_yards: i64,
    pub td_thrown: i64,
    pub interceptions: i64,
    pub rushing_yards: i64,
    pub rushing_td: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RunningBackStats {
    pub rushing_yards: i64,
    pub rushing_td: i64,
    pub receiving_yards: i64,
    pub receiving_td: i64,
    pub receptions: i64,
}

/// Any NFL position other than QB and RB
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ReceiverStats {
    pub receiving_yards: i64,
    pub receiving_td: i64,
    pub receptions: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BasketballStats {
    pub points: i64,
    pub assists: i64,
    pub rebounds: i64,
    pub blocks: i64,
    pub steals: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct HockeyStats {
    pub goals: i64,
    pub assists: i64,
    pub points: i64,
    pub plus_minus: i64,
    pub penalty_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BaseballStats {
    pub batting_avg: f64,
    pub home_runs: i64,
    pub rbi: i64,
    pub runs: i64,
    pub stolen_bases: i64,
}

/// Season stat line for one player.
///
/// Serialized untagged, so each record is a flat object of stat name to number.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum StatRecord {
    Quarterback(QuarterbackStats),
    RunningBack(RunningBackStats),
    Receiver(ReceiverStats),
    Basketball(BasketballStats),
    Hockey(HockeyStats),
    Baseball(BaseballStats),
}

impl StatRecord {
    /// Sport this shape of record belongs to.
    pub fn sport(&self) -> Sport {
        match self {
            StatRecord::Quarterback(_) | StatRecord::RunningBack(_) | StatRecord::Receiver(_) => {
                Sport::Nfl
            }
            StatRecord::Basketball(_) => Sport::Nba,
            StatRecord::Hockey(_) => Sport::Nhl,
            StatRecord::Baseball(_) => Sport::Mlb,
        }
    }
}

/// Player id -> stat record
pub type StatsMap = BTreeMap<String, StatRecord>;

/// Response body for `GET /`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<String>,
    pub total_players: usize,
}
