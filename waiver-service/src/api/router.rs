use super::handlers::health::handle_health;
use super::handlers::submit::handle_submit;
use super::middleware::logging::logging_middleware;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::{error, info};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use waiver_core::foundation::WaiverError;

pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<(), WaiverError> {
    info!("binding waiver server addr={}", addr);
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server ready and accepting connections addr={}", addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await.map_err(|err| {
        error!("HTTP server terminated unexpectedly addr={} error={}", addr, err);
        WaiverError::Message(err.to_string())
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/submit-waiver", post(handle_submit))
        .route("/health", get(handle_health))
        // Screenshots ride along as base64 PNGs, so the default limit
        // is far too small.
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(axum::middleware::from_fn(logging_middleware))
        .with_state(state)
}
