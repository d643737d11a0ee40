mod config;
mod db;
mod documents;
mod errors;
mod jobs;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::documents::pdf::PdfTextExtractor;
use crate::jobs::repository::{JobRepository, PgJobRepository};
use crate::matching::catalog::SkillCatalog;
use crate::matching::service::MatchingService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillLink API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed job repository
    let db = create_pool(&config.database_url).await?;
    let jobs: Arc<dyn JobRepository> = Arc::new(PgJobRepository::new(db));

    // Skill catalog: built-in list unless SKILL_CATALOG_PATH points elsewhere
    let catalog = Arc::new(SkillCatalog::load(config.skill_catalog_path.as_deref())?);
    info!(
        "Skill catalog loaded: {} skills ({})",
        catalog.len(),
        config.skill_catalog_path.as_deref().unwrap_or("built-in")
    );

    if catalog.is_empty() {
        warn!("Skill catalog is empty; every match will report zero skills");
    }

    let matcher = MatchingService::new(jobs.clone(), catalog, config.match_limit);

    // Build app state
    let state = AppState {
        config: config.clone(),
        jobs,
        matcher,
        text_extractor: Arc::new(PdfTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
