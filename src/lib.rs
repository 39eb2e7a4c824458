//! SendPulse Status Gateway
//!
//! A small HTTP gateway in front of the SendPulse email API. It serves two
//! demonstration endpoints, guards selected routes with a bearer token, and
//! proxies subscriber status lookups: each lookup exchanges client
//! credentials for an access token, caches it process-wide, and uses it to
//! fetch the status record.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream Client**: reqwest
//! - **Authentication**: Bearer token compared against the cached upstream token
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod token;

pub use config::Config;
pub use error::AppError;
pub use routes::{Access, create_router};
pub use services::sendpulse::SendPulseClient;
pub use state::AppState;
pub use token::TokenStore;
