use axum::{extract::State, response::Json};

use super::AppState;
use crate::models::StatsMap;

// GET /api/stats - Stat record for every cached player, keyed by player id
pub async fn get_stats(State(snapshot): State<AppState>) -> Json<StatsMap> {
    Json(snapshot.stats().clone())
}
