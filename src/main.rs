//! Books API server
//!
//! Serves the in-memory book catalog over HTTP.

use std::net::SocketAddr;

use axum::{extract::Request, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use books_api::{
    config::AppConfig,
    create_app,
    repository::{books::BooksRepository, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("books_api={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        "Starting Books API v{} ({} mode)",
        env!("CARGO_PKG_VERSION"),
        config.mode.as_str()
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let services = Services::new(Repository::new(BooksRepository::seeded()));
    let total_books = services.catalog.count_books()?;
    let state = AppState::new(config, services);

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Total books in memory: {}", total_books);
    tracing::info!("API overview at http://{}/ and OpenAPI at /api-docs/openapi.json", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
