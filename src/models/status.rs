//! Email status models.
//!
//! `StatusResponse` is both the record the upstream returns and the shape the
//! gateway answers with, for success and for failure alike.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Subscriber status record.
///
/// # Example
///
/// ```json
/// {
///   "message": "",
///   "status": 1,
///   "status_explain": "active"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Error text; empty on success
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub status: i64,

    #[serde(default)]
    pub status_explain: String,
}

impl StatusResponse {
    /// Failure envelope: only `message` is populated.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// Upstream error object, e.g. `{"message": "user not found"}`.
#[derive(Debug, Default, Deserialize)]
struct UpstreamFailure {
    #[serde(default)]
    message: String,
}

/// The two shapes the `/emails/{email}` endpoint may answer with.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusReply {
    /// A single object carrying a non-empty `message`
    Failure(String),

    /// An array of status records
    Records(Vec<StatusResponse>),
}

impl StatusReply {
    /// Decode a raw upstream body.
    ///
    /// The error-object shape is tried first; a body that does not decode as
    /// an object, or whose `message` is empty, falls through to the array
    /// shape. Only the array decode can fail.
    pub fn parse(body: &str) -> Result<Self, AppError> {
        if let Ok(failure) = serde_json::from_str::<UpstreamFailure>(body) {
            if !failure.message.is_empty() {
                return Ok(StatusReply::Failure(failure.message));
            }
        }

        serde_json::from_str::<Vec<StatusResponse>>(body)
            .map(StatusReply::Records)
            .map_err(|e| AppError::decode(e, body))
    }

    /// Reduce the reply to the single record handed back to the client.
    pub fn into_first_record(self, body: &str) -> Result<StatusResponse, AppError> {
        match self {
            StatusReply::Failure(message) => Err(AppError::UpstreamReported(message)),
            StatusReply::Records(records) => {
                records
                    .into_iter()
                    .next()
                    .ok_or_else(|| AppError::EmptyStatusList {
                        body: body.to_string(),
                    })
            }
        }
    }
}
