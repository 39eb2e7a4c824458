//! Demonstration endpoints.

use axum::{Json, extract::Path};

use crate::models::hello::HelloResponse;

/// Server root page (plain text).
pub async fn root_page() -> &'static str {
    "root page"
}

/// Greeting handler for `GET /api/v1/`.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "message": "Hello world!"
/// }
/// ```
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse::world())
}

/// Personalized greeting for `GET /api/v1/{name}`.
pub async fn hello_name(Path(name): Path<String>) -> Json<HelloResponse> {
    Json(HelloResponse::named(&name))
}
