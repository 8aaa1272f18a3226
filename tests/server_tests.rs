//! End-to-end tests against a running server.
//!
//! These tests start the compiled application binary with a generated config
//! and exercise the HTTP endpoints over a real connection.
//! Tests run in parallel by default since the server supports concurrent requests.
//!
//! Run with: cargo test --test server_tests

use std::io::Write;
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::Duration;

const SERVER_PORT: u16 = 3801;
const BASE_URL: &str = "http://127.0.0.1:3801";

const GREETING_BODY: &str = "in the light";
const HEALTH_BODY: &str = "OK";

/// Global server process manager
static SERVER: OnceLock<ServerManager> = OnceLock::new();

/// Manages the application server process lifecycle
struct ServerManager {
    process: Option<Child>,
    // Held so the config file outlives the server process
    _config: tempfile::NamedTempFile,
}

impl ServerManager {
    /// Start the server binary with a test config and wait for it to accept connections
    fn init() -> Self {
        let mut config = tempfile::NamedTempFile::new().expect("Failed to create test config");
        write!(
            config,
            "[http]\nhost = \"127.0.0.1\"\nport = {}\n",
            SERVER_PORT
        )
        .expect("Failed to write test config");

        eprintln!("[test] Starting server on port {}...", SERVER_PORT);

        let process = Command::new(env!("CARGO_BIN_EXE_beacon"))
            .arg("--config")
            .arg(config.path())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server binary");

        let manager = Self {
            process: Some(process),
            _config: config,
        };

        manager.wait_for_ready();

        manager
    }

    /// Check if the server is accepting connections
    fn is_running() -> bool {
        TcpStream::connect(format!("127.0.0.1:{}", SERVER_PORT)).is_ok()
    }

    /// Wait for the server to be ready to accept connections
    fn wait_for_ready(&self) {
        let max_attempts = 50;
        let delay = Duration::from_millis(100);

        for attempt in 0..max_attempts {
            if Self::is_running() {
                eprintln!("[test] server ready after {} attempts", attempt + 1);
                return;
            }
            std::thread::sleep(delay);
        }

        panic!(
            "server did not start within {} seconds",
            (max_attempts as f64 * delay.as_secs_f64())
        );
    }
}

impl Drop for ServerManager {
    fn drop(&mut self) {
        if let Some(ref mut process) = self.process {
            eprintln!("[test] Stopping server...");
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}

/// Ensure the shared server is running before a test issues requests
fn ensure_server() {
    SERVER.get_or_init(ServerManager::init);
}

#[tokio::test]
async fn greeting_get_returns_fixed_body() {
    ensure_server();

    let response = reqwest::get(format!("{}/", BASE_URL)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .expect("greeting should carry a cache-control header"),
        "public, max-age=60"
    );
    assert_eq!(response.text().await.unwrap(), GREETING_BODY);
}

#[tokio::test]
async fn greeting_post_ignores_request_body() {
    ensure_server();

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/", BASE_URL))
        .body("{\"anything\": [1, 2, 3]}")
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING_BODY);
}

#[tokio::test]
async fn health_paths_return_ok() {
    ensure_server();

    let client = reqwest::Client::new();
    for path in ["/health", "/health/", "/healthz", "/healthz/"] {
        let response = client
            .get(format!("{}{}", BASE_URL, path))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "unexpected status for {}", path);
        // Probes must never be served from a cache
        assert!(
            response.headers().get("cache-control").is_none(),
            "health response for {} should not be cacheable",
            path
        );
        assert_eq!(response.text().await.unwrap(), HEALTH_BODY);
    }
}

#[tokio::test]
async fn health_ignores_methods_and_headers() {
    ensure_server();

    let client = reqwest::Client::new();
    for method in [
        reqwest::Method::POST,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
    ] {
        let response = client
            .request(method.clone(), format!("{}/healthz", BASE_URL))
            .header("x-forwarded-for", "not-an-ip-address")
            .header("accept", "garbage/nonsense")
            .header("x-totally-made-up", "\t odd whitespace \t")
            .body("ignored payload")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "unexpected status for {}", method);
        assert_eq!(response.text().await.unwrap(), HEALTH_BODY);
    }
}

#[tokio::test]
async fn greeting_ignores_query_parameters() {
    ensure_server();

    let response = reqwest::get(format!("{}/?probe=1&x=%20", BASE_URL))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING_BODY);
}
