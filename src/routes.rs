//! Router configuration.
//!
//! Each API route is registered together with its [`Access`] requirement, so
//! authorization is declared next to the route instead of being inferred from
//! the request path.
//!
//! # Route Structure
//!
//! ```text
//! /                        - Root page (public)
//! /api/v1/                 - Greeting (bearer)
//! /api/v1/{name}           - Personalized greeting (public)
//! /api/v1/getStatus        - Subscriber status lookup (public)
//! OPTIONS *                - Pre-flight, always 200
//! ```

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{auth::bearer_auth, cors::cors};
use crate::state::AppState;

/// Path prefix all API routes are mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Authorization requirement attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No credential needed
    Public,

    /// `Authorization: Bearer <cached token>` required
    Bearer,
}

/// A route registration: path, access requirement and handler.
struct ApiRoute {
    path: String,
    access: Access,
    handler: MethodRouter<AppState>,
}

impl ApiRoute {
    fn new(path: &str, access: Access, handler: MethodRouter<AppState>) -> Self {
        Self {
            path: format!("{}{}", API_PREFIX, path),
            access,
            handler,
        }
    }
}

/// The API route table.
///
/// Only the API root carries a bearer requirement; the greeting by name and
/// the status lookup are public.
fn api_routes() -> Vec<ApiRoute> {
    vec![
        ApiRoute::new("/", Access::Bearer, get(handlers::hello::hello_world)),
        ApiRoute::new("/{name}", Access::Public, get(handlers::hello::hello_name)),
        ApiRoute::new(
            "/getStatus",
            Access::Public,
            get(handlers::status::get_status),
        ),
    ]
}

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The public root page
/// - API routes, each guarded according to its [`Access`]
/// - CORS headers and the `OPTIONS` short-circuit on every path
/// - Request tracing
pub fn create_router(state: AppState) -> Router {
    let api = api_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            let handler = match route.access {
                Access::Public => route.handler,
                Access::Bearer => {
                    route
                        .handler
                        .route_layer(from_fn_with_state(state.clone(), bearer_auth))
                }
            };
            router.route(&route.path, handler)
        });

    Router::new()
        .route("/", get(handlers::hello::root_page))
        .merge(api)
        // Pre-flight is answered before routing or authentication
        .layer(from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
