//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (URL params, query string)
//! 2. Delegates to services for upstream work
//! 3. Returns HTTP response (JSON, status code)

/// Demonstration greeting endpoints
pub mod hello;
/// Subscriber status lookup
pub mod status;
