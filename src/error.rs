//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::status::StatusResponse;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code through
/// [`AppError::status_code`].
///
/// # Error Categories
///
/// - **Validation Errors**: Required request input is missing
/// - **Upstream Errors**: The SendPulse API could not be reached, replied with
///   something that does not decode, or reported a failure in its payload
/// - **Authentication Errors**: Missing or invalid bearer token
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required request input is missing (e.g., empty `email`).
    #[error("{0}")]
    Validation(String),

    /// Network-level failure talking to the upstream API.
    ///
    /// The String is the transport error text.
    #[error("{0}")]
    UpstreamTransport(String),

    /// Upstream reply could not be decoded into the expected JSON shape.
    ///
    /// The raw body is kept for diagnostics and echoed back to the client.
    #[error("{message} Server response: {body}")]
    UpstreamDecode { message: String, body: String },

    /// Upstream replied successfully at the transport level but carried an
    /// error `message` in its payload.
    #[error("{0}")]
    UpstreamReported(String),

    /// Upstream status lookup decoded to an empty list.
    #[error("Server returned empty array!!! Server response: {body}")]
    EmptyStatusList { body: String },

    /// Authorization header is missing or does not carry the cached token.
    ///
    /// Returns HTTP 401 Unauthorized with an empty body.
    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn empty_email() -> Self {
        AppError::Validation("Empty user email!!!".to_string())
    }

    pub fn decode(err: serde_json::Error, body: &str) -> Self {
        AppError::UpstreamDecode {
            message: err.to_string(),
            body: body.to_string(),
        }
    }

    /// HTTP status for each error kind.
    ///
    /// Every upstream failure collapses to 400; there is no 502/504 split.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_)
            | AppError::UpstreamTransport(_)
            | AppError::UpstreamDecode { .. }
            | AppError::UpstreamReported(_)
            | AppError::EmptyStatusList { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Short kind label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::UpstreamTransport(_) => "upstream_transport",
            AppError::UpstreamDecode { .. } => "upstream_decode",
            AppError::UpstreamReported(_) => "upstream_reported",
            AppError::EmptyStatusList { .. } => "upstream_empty_list",
            AppError::Unauthorized => "unauthorized",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamTransport(err.to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// `Unauthorized` is a bare 401 with no body. Every other error returns the
/// gateway's status shape with only `message` populated:
/// ```json
/// {
///   "message": "Empty user email!!!",
///   "status": 0,
///   "status_explain": ""
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Unauthorized = self {
            return status.into_response();
        }

        let body = Json(StatusResponse::failure(self.to_string()));

        (status, body).into_response()
    }
}
