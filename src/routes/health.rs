//! Liveness and readiness probes for container orchestration.
//!
//! Kubernetes restarts the pod when `/alive` fails and stops routing traffic
//! to it while `/ready` fails. Both report the flags in [`ProbeFlags`], which
//! can be flipped at runtime through `/set-probe`.
//!
//! [`ProbeFlags`]: crate::state::ProbeFlags

use axum::{
    extract::State,
    http::{Method, StatusCode},
};
use tracing::instrument;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Liveness probe: 200 while alive, 500 once marked dead.
#[instrument(name = "health::alive", skip_all)]
pub async fn alive(
    method: Method,
    State(state): State<AppState>,
) -> Result<Envelope<&'static str>, AppError> {
    AppError::require_method(Method::GET, &method)?;

    Ok(if state.probes.is_alive() {
        Envelope::new(StatusCode::OK, "This app is alive")
    } else {
        Envelope::new(StatusCode::INTERNAL_SERVER_ERROR, "This app is dead")
    })
}

/// Readiness probe: 200 while ready, 503 once taken out of rotation.
#[instrument(name = "health::ready", skip_all)]
pub async fn ready(
    method: Method,
    State(state): State<AppState>,
) -> Result<Envelope<&'static str>, AppError> {
    AppError::require_method(Method::GET, &method)?;

    Ok(if state.probes.is_ready() {
        Envelope::new(StatusCode::OK, "This app is ready")
    } else {
        Envelope::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "This app is not ready for traffic",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PodIdentity;

    fn state() -> AppState {
        AppState::new(PodIdentity::default())
    }

    #[tokio::test]
    async fn test_alive_by_default() {
        let envelope = alive(Method::GET, State(state())).await.unwrap();
        assert_eq!(envelope.status(), StatusCode::OK);
        assert_eq!(*envelope.message(), "This app is alive");
        assert!(envelope.success());
    }

    #[tokio::test]
    async fn test_dead_after_toggle() {
        let state = state();
        state.probes.toggle_alive();
        let envelope = alive(Method::GET, State(state)).await.unwrap();
        assert_eq!(envelope.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(*envelope.message(), "This app is dead");
        assert!(!envelope.success());
    }

    #[tokio::test]
    async fn test_ready_by_default() {
        let envelope = ready(Method::GET, State(state())).await.unwrap();
        assert_eq!(envelope.status(), StatusCode::OK);
        assert_eq!(*envelope.message(), "This app is ready");
    }

    #[tokio::test]
    async fn test_not_ready_after_toggle() {
        let state = state();
        state.probes.toggle_ready();
        let envelope = ready(Method::GET, State(state.clone())).await.unwrap();
        assert_eq!(envelope.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(*envelope.message(), "This app is not ready for traffic");

        // liveness is unaffected
        let envelope = alive(Method::GET, State(state)).await.unwrap();
        assert_eq!(envelope.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_is_rejected() {
        let err = ready(Method::HEAD, State(state())).await.unwrap_err();
        assert_eq!(
            err,
            AppError::MethodNotAllowed {
                allowed: Method::GET,
                received: Method::HEAD,
            }
        );
    }
}
