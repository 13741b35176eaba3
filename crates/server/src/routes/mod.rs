use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub mod chat;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(chat::chat_routes())
        // The mobile front-end calls from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
