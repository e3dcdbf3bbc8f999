//! Error types for cargrader-lu
//!
//! Client-visible messages are fixed strings; the data-access cause behind a
//! `ServerError` is logged by the handler and never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Lookup API error
#[derive(Debug, Error)]
pub enum LookupError {
    /// Required parameter missing, empty, or unparseable (400)
    #[error("Missing params")]
    InvalidRequest,

    /// No gradeable record matches (404)
    #[error("Not found")]
    NotFound,

    /// Data-access failure (500)
    #[error("Server error")]
    ServerError(#[from] sqlx::Error),
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::InvalidRequest => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
