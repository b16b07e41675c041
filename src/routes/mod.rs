use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::snapshot::Snapshot;

pub mod index;
pub mod players;
pub mod stats;

pub const PLAYERS_PATH: &str = "/api/players";
pub const STATS_PATH: &str = "/api/stats";

/// Data routes advertised by `GET /`.
pub const ENDPOINTS: [&str; 2] = [PLAYERS_PATH, STATS_PATH];

pub type AppState = Arc<Snapshot>;

pub fn create_router(snapshot: AppState) -> Router {
    // Frontend may be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::get_index))
        .route(PLAYERS_PATH, get(players::get_players))
        .route(STATS_PATH, get(stats::get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(snapshot)
}
