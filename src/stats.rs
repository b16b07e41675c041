//! Placeholder stat generation.
//!
//! Values are random draws, not a model of real performance. Every field is
//! drawn uniformly from `[min, min + range)`.

use rand::Rng;

use crate::models::{
    BaseballStats, BasketballStats, HockeyStats, Player, QuarterbackStats, ReceiverStats,
    RunningBackStats, Sport, StatRecord, StatsMap,
};

/// Half-open integer interval `[min, min + range)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: i64,
    pub range: i64,
}

impl Span {
    pub const fn new(min: i64, range: i64) -> Self {
        Self { min, range }
    }

    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..self.min + self.range)
    }

    pub fn contains(self, value: i64) -> bool {
        (self.min..self.min + self.range).contains(&value)
    }
}

/// Field ranges, grouped by stat shape.
pub mod ranges {
    use super::Span;

    pub mod quarterback {
        use super::Span;
        pub const PASSING_YARDS: Span = Span::new(3500, 1500);
        pub const TD_THROWN: Span = Span::new(25, 15);
        pub const INTERCEPTIONS: Span = Span::new(8, 7);
        pub const RUSHING_YARDS: Span = Span::new(200, 200);
        pub const RUSHING_TD: Span = Span::new(2, 3);
    }

    pub mod running_back {
        use super::Span;
        pub const RUSHING_YARDS: Span = Span::new(800, 700);
        pub const RUSHING_TD: Span = Span::new(6, 8);
        pub const RECEIVING_YARDS: Span = Span::new(300, 300);
        pub const RECEIVING_TD: Span = Span::new(2, 3);
        pub const RECEPTIONS: Span = Span::new(30, 30);
    }

    pub mod receiver {
        use super::Span;
        pub const RECEIVING_YARDS: Span = Span::new(700, 600);
        pub const RECEIVING_TD: Span = Span::new(5, 7);
        pub const RECEPTIONS: Span = Span::new(50, 40);
    }

    pub mod basketball {
        use super::Span;
        pub const POINTS: Span = Span::new(1200, 1000);
        pub const ASSISTS: Span = Span::new(200, 400);
        pub const REBOUNDS: Span = Span::new(300, 500);
        pub const BLOCKS: Span = Span::new(30, 50);
        pub const STEALS: Span = Span::new(50, 50);
    }

    pub mod hockey {
        use super::Span;
        pub const GOALS: Span = Span::new(20, 30);
        pub const ASSISTS: Span = Span::new(30, 40);
        pub const POINTS: Span = Span::new(50, 60);
        pub const PLUS_MINUS: Span = Span::new(-5, 30);
        pub const PENALTY_MINUTES: Span = Span::new(20, 40);
    }

    pub mod baseball {
        use super::Span;
        pub const BATTING_AVG_MIN: f64 = 0.250;
        pub const BATTING_AVG_RANGE: f64 = 0.080;
        pub const HOME_RUNS: Span = Span::new(15, 25);
        pub const RBI: Span = Span::new(50, 50);
        pub const RUNS: Span = Span::new(60, 40);
        pub const STOLEN_BASES: Span = Span::new(5, 20);
    }
}

/// One stat record per player, keyed by player id.
pub fn generate_stats<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> StatsMap {
    players
        .iter()
        .map(|player| (player.id.clone(), stat_record(player, rng)))
        .collect()
}

/// Pick the record shape for a player's sport/position and fill it.
pub fn stat_record<R: Rng + ?Sized>(player: &Player, rng: &mut R) -> StatRecord {
    use ranges::*;

    match player.sport {
        Sport::Nfl => match player.position.as_str() {
            "QB" => StatRecord::Quarterback(QuarterbackStats {
                passing_yards: quarterback::PASSING_YARDS.draw(rng),
                td_thrown: quarterback::TD_THROWN.draw(rng),
                interceptions: quarterback::INTERCEPTIONS.draw(rng),
                rushing_yards: quarterback::RUSHING_YARDS.draw(rng),
                rushing_td: quarterback::RUSHING_TD.draw(rng),
            }),
            "RB" => StatRecord::RunningBack(RunningBackStats {
                rushing_yards: running_back::RUSHING_YARDS.draw(rng),
                rushing_td: running_back::RUSHING_TD.draw(rng),
                receiving_yards: running_back::RECEIVING_YARDS.draw(rng),
                receiving_td: running_back::RECEIVING_TD.draw(rng),
                receptions: running_back::RECEPTIONS.draw(rng),
            }),
            _ => StatRecord::Receiver(ReceiverStats {
                receiving_yards: receiver::RECEIVING_YARDS.draw(rng),
                receiving_td: receiver::RECEIVING_TD.draw(rng),
                receptions: receiver::RECEPTIONS.draw(rng),
            }),
        },
        Sport::Nba => StatRecord::Basketball(BasketballStats {
            points: basketball::POINTS.draw(rng),
            assists: basketball::ASSISTS.draw(rng),
            rebounds: basketball::REBOUNDS.draw(rng),
            blocks: basketball::BLOCKS.draw(rng),
            steals: basketball::STEALS.draw(rng),
        }),
        Sport::Nhl => StatRecord::Hockey(HockeyStats {
            goals: hockey::GOALS.draw(rng),
            assists: hockey::ASSISTS.draw(rng),
            points: hockey::POINTS.draw(rng),
            plus_minus: hockey::PLUS_MINUS.draw(rng),
            penalty_minutes: hockey::PENALTY_MINUTES.draw(rng),
        }),
        Sport::Mlb => StatRecord::Baseball(BaseballStats {
            batting_avg: draw_batting_avg(rng),
            home_runs: baseball::HOME_RUNS.draw(rng),
            rbi: baseball::RBI.draw(rng),
            runs: baseball::RUNS.draw(rng),
            stolen_bases: baseball::STOLEN_BASES.draw(rng),
        }),
    }
}

fn draw_batting_avg<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    use ranges::baseball::{BATTING_AVG_MIN, BATTING_AVG_RANGE};
    rng.gen_range(BATTING_AVG_MIN..BATTING_AVG_MIN + BATTING_AVG_RANGE)
}
