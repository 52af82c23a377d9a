//! Shared application state for request handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::PodIdentity;

/// The two probe flags an orchestrator polls.
///
/// Both start out `true`. Only the toggle endpoint flips them, so a plain
/// atomic per flag is enough; `fetch_xor` keeps concurrent toggles from
/// losing an update.
#[derive(Debug)]
pub struct ProbeFlags {
    alive: AtomicBool,
    ready: AtomicBool,
}

impl Default for ProbeFlags {
    fn default() -> Self {
        Self {
            alive: AtomicBool::new(true),
            ready: AtomicBool::new(true),
        }
    }
}

impl ProbeFlags {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Inverts the liveness flag and returns the new value.
    pub fn toggle_alive(&self) -> bool {
        !self.alive.fetch_xor(true, Ordering::SeqCst)
    }

    /// Inverts the readiness flag and returns the new value.
    pub fn toggle_ready(&self) -> bool {
        !self.ready.fetch_xor(true, Ordering::SeqCst)
    }
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<PodIdentity>,
    pub probes: Arc<ProbeFlags>,
}

impl AppState {
    /// Creates a new application state with both probes passing.
    pub fn new(identity: PodIdentity) -> Self {
        Self {
            identity: Arc::new(identity),
            probes: Arc::new(ProbeFlags::default()),
        }
    }
}
