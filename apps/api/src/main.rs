mod config;
mod errors;
mod extract;
mod models;
mod normalize;
mod routes;
mod scoring;
mod state;
mod vocabulary;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::normalize::NormalizeOptions;
use crate::routes::build_router;
use crate::scoring::composite::WeightPreset;
use crate::state::AppState;
use crate::vocabulary::ControlledVocabulary;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Match API v{}", env!("CARGO_PKG_VERSION"));

    // Load the controlled skill vocabulary — read-only for the process lifetime
    let vocabulary = Arc::new(ControlledVocabulary::load(&config.vocabulary_path)?);
    info!(
        "Skill vocabulary loaded ({} terms from {})",
        vocabulary.len(),
        config.vocabulary_path
    );

    // Select the weighting preset
    let preset = WeightPreset::from_name(&config.match_preset).with_context(|| {
        format!(
            "MATCH_PRESET '{}' is not a known preset (expected lexical-weighted or composite-ats)",
            config.match_preset
        )
    })?;
    info!("Weighting preset: {}", preset.name());

    let normalize_options = NormalizeOptions {
        alphabetic_only: config.alphabetic_tokens_only,
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        vocabulary,
        preset,
        normalize_options,
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
