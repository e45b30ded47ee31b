use std::path::Path;

use axum::{Json, Router, http::StatusCode, http::Uri, routing::get};
use tower_http::services::ServeDir;

use crate::{response::MessageBody, state::AppState};

pub mod doc;
pub mod health;
pub mod orders;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(products::router())
        .merge(orders::router())
}

/// Everything the server exposes, minus the tower layers added in `main`.
pub fn create_app(state: AppState, downloads_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .nest_service("/downloads", ServeDir::new(downloads_dir))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<MessageBody>) {
    tracing::debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Not Found")))
}
