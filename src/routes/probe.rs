//! Debug endpoint for flipping the probe flags.
//!
//! `POST /set-probe?flag=alive` or `?flag=ready` inverts the matching flag so
//! failure handling in the orchestrator can be exercised by hand.

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
};
use tracing::instrument;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Which probe flag a toggle request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFlag {
    Alive,
    Ready,
}

impl ProbeFlag {
    /// Parses the value of the `flag` query parameter. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "alive" => Some(ProbeFlag::Alive),
            "ready" => Some(ProbeFlag::Ready),
            _ => None,
        }
    }

    /// Looks up the first `flag` parameter; later duplicates are ignored.
    pub fn from_query(params: &[(String, String)]) -> Option<Self> {
        params
            .iter()
            .find(|(key, _)| key == "flag")
            .and_then(|(_, value)| Self::parse(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFlag::Alive => "alive",
            ProbeFlag::Ready => "ready",
        }
    }
}

/// Inverts the requested flag and reports its new value.
#[instrument(name = "probe::set_probe", skip_all)]
pub async fn set_probe(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Envelope<String>, AppError> {
    AppError::require_method(Method::POST, &method)?;

    let flag = ProbeFlag::from_query(&params).ok_or(AppError::UnknownFlag)?;

    let value = match flag {
        ProbeFlag::Alive => state.probes.toggle_alive(),
        ProbeFlag::Ready => state.probes.toggle_ready(),
    };
    tracing::warn!(flag = flag.as_str(), value, "Probe flag toggled");

    Ok(Envelope::new(
        StatusCode::OK,
        format!("{} bool toggled, new value is {}", flag.as_str(), value),
    ))
}
