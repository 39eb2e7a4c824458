//! Data models for requests and responses.
//!
//! This module contains the JSON shapes exchanged with clients and with the
//! SendPulse API.

/// OAuth client-credentials exchange
pub mod access_token;
/// Greeting responses
pub mod hello;
/// Subscriber email status
pub mod status;
