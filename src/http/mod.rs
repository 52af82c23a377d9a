//! HTTP server startup and graceful shutdown.
//!
//! Plain HTTP only. The listener drains in-flight requests on SIGTERM/SIGINT,
//! which is what Kubernetes sends before killing the pod.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
pub use shutdown::shutdown_signal;
