//! Shared application state injected into handlers and middleware.

use crate::config::Config;
use crate::services::sendpulse::SendPulseClient;
use crate::token::TokenStore;

/// State shared by every request via Axum's `State` extractor.
///
/// Cloning is cheap: the HTTP client and the token store are both
/// reference-counted handles.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sendpulse: SendPulseClient,
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(sendpulse: SendPulseClient, tokens: TokenStore) -> Self {
        Self { sendpulse, tokens }
    }

    /// Build state from configuration with an unset token.
    ///
    /// # Errors
    ///
    /// Returns an error if `SENDPULSE_API_URL` is not a valid base URL.
    pub fn from_config(config: &Config) -> Result<Self, url::ParseError> {
        let sendpulse = SendPulseClient::new(
            reqwest::Client::new(),
            &config.sendpulse_api_url,
            &config.sendpulse_client_id,
            &config.sendpulse_client_secret,
        )?;

        Ok(Self::new(sendpulse, TokenStore::new()))
    }
}
