//! Greeting handler.
//!
//! Serves `/` and, like a catch-all mux root, every path no other route claims.

use axum::{
    extract::State,
    http::{Method, StatusCode},
};
use tracing::instrument;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Greets the caller with the pod's name and address.
#[instrument(name = "home::index", skip_all)]
pub async fn index(
    method: Method,
    State(state): State<AppState>,
) -> Result<Envelope<String>, AppError> {
    AppError::require_method(Method::GET, &method)?;

    let identity = &state.identity;
    Ok(Envelope::new(
        StatusCode::OK,
        format!("Hello from {}. I have ip {}", identity.name, identity.address),
    ))
}
