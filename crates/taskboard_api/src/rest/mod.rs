//! HTTP authentication API.
//!
//! Axum router in front of `taskboard_core::auth`.
//!
//! Endpoints:
//!   POST /api/login
//!   POST /api/refresh
//!   GET  /api/me      (bearer token required)
//!   GET  /api/health  (no auth)

pub mod guard;
pub mod routes;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard_core::AuthService;
use tower_http::cors::CorsLayer;

/// Shared state for request handlers.
pub struct AppContext {
    pub auth: AuthService,
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/login", post(routes::auth::login))
        .route("/api/refresh", post(routes::auth::refresh))
        .route("/api/me", get(routes::auth::me))
        // the browser UI is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

/// Binds `addr` and serves the API until the process exits.
pub async fn serve(addr: SocketAddr, ctx: Arc<AppContext>) -> Result<()> {
    let router = build_router(ctx);
    info!("event=api_listen module=rest status=ok addr={addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
