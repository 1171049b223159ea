// Centralized error handling for the roster service

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised by a key-value persistence backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that reach the browser as an error page.
///
/// Invalid form input is not an error here: the roster operations ignore it
/// and the handler redirects back to the table.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Roster is unavailable: {0}")]
    RosterUnavailable(String),
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = match &self {
            UiError::RosterUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p><a href=\"/\">Back to roster</a></body></html>",
            status.as_u16(),
            crate::utils::html::escape(&self.to_string()),
        );

        (status, Html(body)).into_response()
    }
}
