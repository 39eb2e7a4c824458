//! Response model for the demonstration greeting endpoints.

use serde::{Deserialize, Serialize};

/// JSON representation of a greeting message.
///
/// # Example
///
/// ```json
/// {
///   "message": "Hello world!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

impl HelloResponse {
    pub fn world() -> Self {
        Self {
            message: "Hello world!".to_string(),
        }
    }

    pub fn named(name: &str) -> Self {
        Self {
            message: format!("Hello {}!", name),
        }
    }
}
