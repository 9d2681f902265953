use crate::config::{Config, Secrets};
use crate::error::Error;
use crate::upstream::{CatalogSource, TmdbClient};
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod error;
pub mod routes_catalog;
pub mod routes_detail;
pub mod routes_embed;
pub mod routes_games;
pub mod routes_search;

/// Shared application context. Immutable for the life of the process.
#[derive(Clone)]
pub struct AppContext {
    pub source: Arc<dyn CatalogSource>,
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(source: Arc<dyn CatalogSource>, config: Config) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app: Router<AppContext> = Router::new()
        .route("/health", get(health_check))
        .merge(routes_catalog::catalog_routes())
        .merge(routes_detail::detail_routes())
        .merge(routes_search::search_routes())
        .merge(routes_embed::embed_routes())
        .merge(routes_games::games_routes());

    if let Some(dir) = static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {:?}", dir);
            app = app.fallback_service(ServeDir::new(&dir).append_index_html_on_directories(true));
        }
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Parse a numeric title or game id from a path or query value.
pub fn parse_id(raw: &str) -> std::result::Result<u64, Error> {
    let cleaned = routes_embed::clean_id(raw);
    cleaned
        .parse()
        .map_err(|_| Error::client(format!("Invalid id: {cleaned}")))
}

/// Start the HTTP server
///
/// Builds the TMDB client from `secrets` and serves until Ctrl+C or SIGTERM.
pub async fn start_server(config: Config, secrets: Secrets) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let source: Arc<dyn CatalogSource> =
        Arc::new(TmdbClient::new(secrets.api_key, &config.upstream));
    let static_dir = config.server.static_dir.clone();
    let ctx = AppContext::new(source, config);

    let app = create_router(ctx, static_dir);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
