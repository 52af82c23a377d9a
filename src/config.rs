//! Startup configuration and constants.
//!
//! There is no configuration file. The pod identity comes from the environment
//! (normally injected by the Kubernetes downward API) and everything else is a
//! command line flag with a default defined here.

use std::ffi::OsString;

use clap::ValueEnum;

// =============================================================================
// HTTP
// =============================================================================

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Probe results must never be served from a cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the pod name
pub const POD_NAME_VAR: &str = "POD_NAME";

/// Environment variable holding the pod IP address
pub const POD_IP_VAR: &str = "POD_IP";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "probe_server=debug";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Identity of the running instance, echoed by the greeting endpoint.
///
/// Read once before the listener starts and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodIdentity {
    pub name: String,
    pub address: String,
}

impl PodIdentity {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Reads `POD_NAME` and `POD_IP` from the process environment.
    ///
    /// Missing values become empty strings; absence is not an error. Invalid
    /// unicode is replaced rather than dropped.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(env_value))
    }

    /// Builds the identity from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: lookup(POD_NAME_VAR).unwrap_or_default(),
            address: lookup(POD_IP_VAR).unwrap_or_default(),
        }
    }
}

fn env_value(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_both_vars() {
        let vars = HashMap::from([
            (POD_NAME_VAR, "web-7d9f".to_string()),
            (POD_IP_VAR, "10.1.2.3".to_string()),
        ]);
        let identity = PodIdentity::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(identity, PodIdentity::new("web-7d9f", "10.1.2.3"));
    }

    #[test]
    fn test_from_lookup_missing_vars_are_empty() {
        let identity = PodIdentity::from_lookup(|_| None);
        assert_eq!(identity.name, "");
        assert_eq!(identity.address, "");
    }

    #[test]
    fn test_env_value_passes_unicode_through() {
        assert_eq!(env_value(OsString::from("10.0.0.7")), "10.0.0.7");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_value_keeps_non_unicode_values() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'p', b'o', b'd', 0xff]);
        assert_eq!(env_value(raw), "pod\u{FFFD}");
    }

    #[test]
    fn test_default_log_filter_targets_this_crate_only() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for directive in DEFAULT_LOG_FILTER.split(',') {
            assert!(directive.starts_with("probe_server="), "{}", directive);
        }
    }

    #[test]
    fn test_log_format_defaults_to_text() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
