//! HTTP route handlers.
//!
//! Each route accepts every method; handlers check it themselves with
//! [`AppError::require_method`] so a mismatch gets a 405 envelope shaped like
//! every other response. Unmatched paths fall through to the greeting handler.
//!
//! [`AppError::require_method`]: crate::error::AppError::require_method

pub mod health;
pub mod home;
pub mod probe;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home::index))
        .route("/alive", any(health::alive))
        .route("/ready", any(health::ready))
        .route("/set-probe", any(probe::set_probe))
        .fallback(home::index)
        .with_state(state)
        // Probe answers reflect live state and must never be cached
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
