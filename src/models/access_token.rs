//! OAuth client-credentials models for the SendPulse token endpoint.
//!
//! The upstream reuses one reply shape for success and failure: a good
//! exchange fills `access_token`, a rejected one fills `message`.

use serde::{Deserialize, Serialize};

/// Grant type sent on every exchange.
pub const CLIENT_CREDENTIALS: &str = "client_credentials";

/// Request body posted to `/oauth/access_token`.
///
/// # Example
///
/// ```json
/// {
///   "grant_type": "client_credentials",
///   "client_id": "...",
///   "client_secret": "..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
}

impl AccessTokenRequest {
    pub fn client_credentials(client_id: &str, client_secret: &str) -> Self {
        Self {
            grant_type: CLIENT_CREDENTIALS.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }
}

/// Reply from `/oauth/access_token`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessTokenResponse {
    /// Upstream error text; empty on success
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub access_token: String,
}
