use axum::{extract::State, response::Json};

use super::{AppState, ENDPOINTS};
use crate::models::IndexResponse;

pub const WELCOME_MESSAGE: &str = "OmniFantasy Backend is running!";

// GET / - Service descriptor
pub async fn get_index(State(snapshot): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: WELCOME_MESSAGE.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        total_players: snapshot.total_players(),
    })
}
