use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use service::auth::TokenIssuer;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::ServerState;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate and wire repositories and services for `cfg`.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!("migrations applied");

    let tokens = TokenIssuer::new(&cfg.auth.jwt_secret)?;
    Ok(ServerState::with_database(db, tokens, cfg.auth.jwt_expires_in))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(err = %e, "failed to listen for ctrl_c");
        return;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app from a validated config and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
