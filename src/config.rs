//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SENDPULSE_CLIENT_ID` (required): OAuth client id for the SendPulse API
/// - `SENDPULSE_CLIENT_SECRET` (required): OAuth client secret for the SendPulse API
/// - `SENDPULSE_API_URL` (optional): SendPulse API base URL, defaults to `https://api.sendpulse.com`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 80
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sendpulse_client_id: String,

    pub sendpulse_client_secret: String,

    #[serde(default = "default_api_url")]
    pub sendpulse_api_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    80
}

fn default_api_url() -> String {
    "https://api.sendpulse.com".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., SENDPULSE_CLIENT_ID)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: sendpulse_api_url -> SENDPULSE_API_URL
        envy::from_env::<Config>()
    }
}
