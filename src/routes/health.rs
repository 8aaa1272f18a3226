//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, and load balancers to verify the service
//! is alive. Deliberately a constant stub: it checks no dependencies and no
//! resources, only that the process can answer HTTP.

/// Health check handler.
///
/// Returns "OK" to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> &'static str {
    "OK"
}
