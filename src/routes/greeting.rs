//! Greeting endpoint for the service root.
//!
//! Returns a fixed string so deployment tooling (and humans) can confirm the
//! service is reachable end-to-end through the load balancer. The request is
//! never inspected: method, headers, query, and body are all ignored.

/// Greeting handler.
///
/// Always responds 200 with the body "in the light", whatever the request.
pub async fn greeting() -> &'static str {
    "in the light"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greeting_returns_fixed_body() {
        assert_eq!(greeting().await, "in the light");
    }

    #[tokio::test]
    async fn greeting_never_varies() {
        for _ in 0..10 {
            assert_eq!(greeting().await, "in the light");
        }
    }
}
