mod config;
mod errors;
mod extract;
mod models;
mod recognizer;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{load_vocabulary, Config};
use crate::extract::patterns::PatternLibrary;
use crate::recognizer::{EntityRecognizer, HttpRecognizer, RuleRecognizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser API v{}", env!("CARGO_PKG_VERSION"));

    // Pattern library: compiled once, read-only for the process lifetime.
    let vocabulary = load_vocabulary(&config)?;
    info!("Skill vocabulary loaded ({} phrases)", vocabulary.len());
    let patterns = Arc::new(PatternLibrary::new(vocabulary)?);

    // Recognizer backend: remote sidecar when configured, otherwise the
    // built-in rule recognizer.
    let recognizer: Arc<dyn EntityRecognizer> = match &config.recognizer_url {
        Some(url) => {
            info!("Entity recognizer: remote sidecar at {url}");
            Arc::new(HttpRecognizer::new(url.clone()))
        }
        None => {
            info!("Entity recognizer: built-in rule recognizer");
            Arc::new(RuleRecognizer::new())
        }
    };

    let state = AppState {
        patterns,
        recognizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
