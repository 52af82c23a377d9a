//! probe-server: a tiny HTTP service with toggleable liveness and readiness
//! probes, used to exercise orchestrator health checking.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::PodIdentity;
pub use envelope::Envelope;
pub use error::AppError;
pub use routes::create_router;
pub use state::{AppState, ProbeFlags};
