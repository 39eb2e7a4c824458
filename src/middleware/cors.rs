//! CORS headers and pre-flight handling.
//!
//! Every request that reaches this layer gets the same permissive header
//! set. `OPTIONS` requests are answered here with an empty 200 and never
//! reach routing or authentication.

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_HEADERS: &str = "Content-Type, Origin, Accept, token";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const VARY_ON: [&str; 3] = [
    "Origin",
    "Access-Control-Request-Method",
    "Access-Control-Request-Headers",
];

/// Append the CORS header set to `headers`.
pub fn add_cors_headers(headers: &mut HeaderMap) {
    headers.append(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    for value in VARY_ON {
        headers.append(VARY, HeaderValue::from_static(value));
    }
    headers.append(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.append(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

/// CORS middleware function.
///
/// # Flow
///
/// 1. `OPTIONS`: respond 200 with CORS headers and no body
/// 2. Anything else: run the next handler, then add CORS headers to its response
pub async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        add_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    add_cors_headers(response.headers_mut());
    response
}
