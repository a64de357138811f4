use crate::handler::hello_handler::hello_world;
use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

/// Binds the hello function to `/{route}`, `/{route}/` and everything below it, for every method.
/// An empty route serves the function on every path.
pub fn create_router(route: &str) -> Router {
    let route = route.trim_matches('/');

    let router = if route.is_empty() {
        Router::new()
            .route("/", any(hello_world))
            .fallback(hello_world)
    } else {
        Router::new()
            .route(&format!("/{route}"), any(hello_world))
            .route(&format!("/{route}/"), any(hello_world))
            .route(&format!("/{route}/{{*rest}}"), any(hello_world))
    };

    router.layer(TraceLayer::new_for_http())
}
