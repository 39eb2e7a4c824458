//! Business logic services.
//!
//! Services contain the upstream calls and the lookup flow, separated from
//! HTTP handlers.

pub mod sendpulse;
pub mod status_service;
