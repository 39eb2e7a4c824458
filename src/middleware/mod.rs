//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Authenticate requests
//! - Modify the response (CORS headers)
//! - Short-circuit requests (reject unauthorized, answer pre-flight)

/// Bearer token authentication middleware
pub mod auth;
/// CORS headers and pre-flight short-circuit
pub mod cors;
