use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Router over an already-migrated pool.
pub fn build_app(db: DatabaseConnection, auth_cfg: &configs::AuthConfig) -> Router {
    let state = auth::ServerState { db, auth: auth_cfg.into() };
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: connect, migrate, and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!("schema migrations applied");

    let app = build_app(db, &cfg.auth);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, require_token = cfg.auth.require_token, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
