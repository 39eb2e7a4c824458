//! HTTP client for the SendPulse REST API.
//!
//! Two calls are used: the OAuth client-credentials exchange and the email
//! status lookup. Neither call retries, and no timeout is set here; HTTP
//! status codes are ignored and every reply body is decoded as-is.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::error::AppError;
use crate::models::access_token::{AccessTokenRequest, AccessTokenResponse};

/// SendPulse API client with a fixed credential pair.
#[derive(Debug, Clone)]
pub struct SendPulseClient {
    http: reqwest::Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
}

impl SendPulseClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.sendpulse.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute hierarchical URL.
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }

        Ok(Self {
            http,
            base_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Exchange the client credentials for an access token.
    ///
    /// # Flow
    ///
    /// 1. POST `{grant_type, client_id, client_secret}` to `/oauth/access_token`
    /// 2. Decode the reply as [`AccessTokenResponse`]
    /// 3. A non-empty `message` is an upstream-reported failure
    ///
    /// # Errors
    ///
    /// - `UpstreamTransport` if the request or body read fails
    /// - `UpstreamDecode` if the body is not the expected JSON
    /// - `UpstreamReported` for replies like `{"message": "invalid_client"}`
    pub async fn exchange_token(&self) -> Result<String, AppError> {
        let request = AccessTokenRequest::client_credentials(&self.client_id, &self.client_secret);

        let body = self
            .http
            .post(self.endpoint(&["oauth", "access_token"]))
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        // A `null` reply decodes to an empty response and yields an empty token
        let reply: AccessTokenResponse = serde_json::from_str::<Option<AccessTokenResponse>>(&body)
            .map_err(|e| AppError::decode(e, &body))?
            .unwrap_or_default();

        if !reply.message.is_empty() {
            return Err(AppError::UpstreamReported(reply.message));
        }

        Ok(reply.access_token)
    }

    /// Fetch the raw status reply for `email` from `/emails/{email}`.
    ///
    /// The body is returned undecoded because the endpoint answers with one
    /// of two JSON shapes; see [`crate::models::status::StatusReply`].
    pub async fn fetch_status(&self, email: &str, token: &str) -> Result<String, AppError> {
        let body = self
            .http
            .get(self.endpoint(&["emails", email]))
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .text()
            .await?;

        Ok(body)
    }
}
