mod analysis;
mod config;
mod errors;
mod extract;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::similarity::{LevenshteinRatio, StringSimilarity};
use crate::analysis::skills::SkillBank;
use crate::analysis::tracks::TrackMap;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (all variables have defaults)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Build the read-only analysis configuration shared by all requests
    let skills = Arc::new(SkillBank::builtin());
    info!("Skill vocabulary ready ({} canonical skills)", skills.canonical().len());

    let tracks = Arc::new(TrackMap::load(&config.track_map_path));
    info!("Track map ready ({} tracks)", tracks.tracks().len());

    // Similarity strategy (swap here for JaroWinklerRatio or another backend)
    let similarity: Arc<dyn StringSimilarity> = Arc::new(LevenshteinRatio);

    // Build app state
    let state = AppState {
        config: config.clone(),
        skills,
        tracks,
        similarity,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
