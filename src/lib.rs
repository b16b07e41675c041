//! OmniFantasy API: player and stat data for NFL, NBA, NHL and MLB, loaded
//! once at startup and served read-only over HTTP.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod providers;
pub mod routes;
pub mod snapshot;
pub mod stats;
