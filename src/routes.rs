use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;

pub const EXAMPLE_PATH: &str = "/v1/api/example";
pub const HEALTH_PATH: &str = "/v1/api/health";

/// Every route the service serves, registered once at startup.
fn route_table() -> Vec<(&'static str, MethodRouter)> {
    vec![
        (EXAMPLE_PATH, post(handlers::post_default_response)),
        (HEALTH_PATH, get(handlers::health)),
    ]
}

pub fn router() -> Router {
    route_table()
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        })
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
}
