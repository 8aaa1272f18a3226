//! HTTP server module.
//!
//! Plain HTTP with graceful shutdown on SIGTERM/SIGINT. TLS is not handled
//! here; deployments terminate TLS at the load balancer.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
