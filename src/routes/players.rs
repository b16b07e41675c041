use axum::{extract::State, response::Json};

use super::AppState;
use crate::models::Player;

// GET /api/players - List every cached player
pub async fn get_players(State(snapshot): State<AppState>) -> Json<Vec<Player>> {
    Json(snapshot.players().to_vec())
}
