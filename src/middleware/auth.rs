//! Bearer token authentication middleware.
//!
//! This middleware guards routes registered with [`Access::Bearer`]:
//! 1. Extract the token from the Authorization header
//! 2. Compare it with the cached SendPulse access token
//! 3. Reject unauthorized requests with HTTP 401 and an empty body
//!
//! [`Access::Bearer`]: crate::routes::Access::Bearer

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Bearer token authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization` header from request
/// 2. Strip a leading `Bearer ` if present
/// 3. Compare the rest with the cached token
/// 4. If equal: call next handler
/// 5. Otherwise: return 401 Unauthorized
///
/// # Headers
///
/// Expected header format:
/// ```text
/// Authorization: Bearer <cached access token>
/// ```
///
/// A header without the prefix is compared as-is, so it only passes if it
/// happens to equal the token itself.
pub async fn bearer_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    if !state.tokens.matches(token).await {
        tracing::debug!(path = %request.uri().path(), "Rejected bearer token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
