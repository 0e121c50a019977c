use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use sea_orm::DatabaseConnection;
use service::product::{repo::seaorm::SeaOrmProductRepository, ProductRepository, ProductService};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire repository → service → handler state over a live connection.
pub fn build_state(db: DatabaseConnection) -> AppState {
    let repo: Arc<dyn ProductRepository> = Arc::new(SeaOrmProductRepository::new(db));
    AppState::new(ProductService::new(repo))
}

/// Resolves on Ctrl+C. If the signal handler cannot be installed the server
/// keeps running until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: load config, then build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        models::db::run_migrations(&db).await?;
    }

    let app: Router = routes::build_router(build_state(db), build_cors());

    // Bind and serve
    let addr = cfg.server.bind_addr()?;
    info!(%addr, "starting product api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
