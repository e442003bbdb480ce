//! Search pipeline configuration

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default trailing-edge debounce window.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Widest debounce window the pipeline accepts.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Tunable knobs for [`SearchPipeline`](crate::pipeline::SearchPipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiescent period before a lookup is issued, in milliseconds.
    ///
    /// 0 fires on the next tick (useful in tests). Valid range: 0-10,000.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    /// Parse a config from TOML text, validating ranges.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Could not parse search config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are within their valid ranges.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            anyhow::bail!(
                "debounce_ms out of range: {} (valid: 0-{})",
                self.debounce_ms,
                MAX_DEBOUNCE_MS
            );
        }
        Ok(())
    }

    /// Debounce window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
