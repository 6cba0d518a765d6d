use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

/// The admin page may be hosted on another origin.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let static_dir = common::env::ensure_static_dir(&cfg.server.static_dir)
        .await
        .then(|| cfg.server.static_dir.clone());

    let app = routes::build_router(ServerState { db }, build_cors(), static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, admin_page = static_dir.is_some(), "starting car dealer api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
