//! HTTP front door
//!
//! The request path is an ordered pipeline: body extraction (JSON or
//! extended URL-encoded), the `/api` router, a terminal 404 fallback, and
//! the opaque 500 renderer on [`crate::Error`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

pub mod extract;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Response envelope used by the terminal handlers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Build the application using the provided state.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router mounted under `/api`. Entity routers (homestays, guides,
/// products, bookings, search) merge in here as those modules land.
fn api_router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

/// Terminal handler for requests no route matched.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiMessage::failure("Endpoint not found")),
    )
}
