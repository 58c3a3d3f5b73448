use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod admin;
pub mod webhook;

async fn health() -> &'static str {
    "ok"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/telegram", post(webhook::telegram_update))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/export", get(admin::export_users))
        .route("/api/admin/message", post(admin::send_message))
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Started listening on {}...", addr);
    axum::serve(listener, build_router(state)).await
}
