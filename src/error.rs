//! Error types for yatra-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::ApiMessage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Error::InvalidBody(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Error::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

/// Every request-scoped error renders as the same opaque 500 envelope.
/// The detail is logged server-side and never reaches the client.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiMessage::failure("Internal server error")),
        )
            .into_response()
    }
}
