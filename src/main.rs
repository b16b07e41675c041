use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use omnifantasy_api::{config::Config, loader, routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OmniFantasy backend...");

    let config = Config::from_env()?;

    let client = reqwest::Client::new();
    let mut rng = StdRng::from_entropy();
    let (snapshot, report) = loader::load_snapshot(&client, &config.upstreams, &mut rng).await;

    if report.degraded() {
        tracing::warn!("Serving sample data for at least one league");
    }

    let app = routes::create_router(Arc::new(snapshot));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Local URL: http://localhost:{}", config.port);
    tracing::info!(
        "Players endpoint: http://localhost:{}{}",
        config.port,
        routes::PLAYERS_PATH
    );
    tracing::info!(
        "Stats endpoint: http://localhost:{}{}",
        config.port,
        routes::STATS_PATH
    );

    axum::serve(listener, app).await?;

    Ok(())
}
