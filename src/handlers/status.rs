//! HTTP handler for the subscriber status lookup.

use axum::{
    Json,
    extract::{RawQuery, State},
};
use url::form_urlencoded;

use crate::error::AppError;
use crate::models::status::StatusResponse;
use crate::services::status_service;
use crate::state::AppState;

/// Query string for `GET /api/v1/getStatus`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusQuery {
    /// Subscriber email; a missing parameter is treated as empty
    pub email: String,
}

impl StatusQuery {
    /// Parse the raw query string.
    ///
    /// Only the first `email` pair counts; repeated or unknown parameters
    /// are ignored rather than rejected.
    pub fn from_raw(query: Option<&str>) -> Self {
        let email = query
            .and_then(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .find(|(key, _)| key == "email")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();

        Self { email }
    }
}

/// Look up a subscriber's email status.
///
/// # Query
///
/// `?email=user@example.com`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "message": "",
///   "status": 1,
///   "status_explain": "active"
/// }
/// ```
///
/// # Response (400 Bad Request)
///
/// Same shape with only `message` set. Used for an empty email and for every
/// upstream failure (unreachable API, undecodable reply, reported error).
pub async fn get_status(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<StatusResponse>, AppError> {
    let query = StatusQuery::from_raw(query.as_deref());

    status_service::lookup_status(&state.sendpulse, &state.tokens, &query.email)
        .await
        .map(Json)
        .inspect_err(|e| tracing::warn!(kind = e.kind(), error = %e, "Status lookup failed"))
}
