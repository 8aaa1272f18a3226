//! HTTP route handlers.
//!
//! Two constant-response endpoints: a greeting at the root and health-check
//! probes. Every route accepts any HTTP method, mirroring the method-agnostic
//! routing the service replaced; request content is never inspected.
//!
//! The greeting carries a short public Cache-Control header since its body
//! never changes. Health responses carry none, so probes always reach the
//! process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Greeting - constant body, safe for upstream caches to hold briefly
    let greeting_routes = Router::new()
        .route("/", any(greeting::greeting))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Health checks - no caching, always fresh for liveness probes.
    // Trailing-slash variants are registered explicitly since axum does not
    // redirect between them.
    let health_routes = Router::new()
        .route("/health", any(health::health))
        .route("/health/", any(health::health))
        .route("/healthz", any(health::health))
        .route("/healthz/", any(health::health));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
