//! Configuration types.

use serde::Deserialize;

/// Application configuration, deserialized from `config.toml`.
///
/// Every field has a default, so a partial or missing file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cadence of the UI tick event, in milliseconds.
    pub tick_rate_ms: u64,
    /// Tracing filter directive, used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log_filter: None,
        }
    }
}
