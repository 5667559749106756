//! Global `tracing` subscriber installation.

use crate::errors::{ExecflowError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

fn default_with_target() -> bool {
    true
}

/// Configuration for the process-wide log subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// An `EnvFilter` directive string, e.g. `"info,execflow=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
    /// Include the event target in each line.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
            with_target: true,
        }
    }
}

impl TracingConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration whose filter comes from `RUST_LOG`, if set.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(filter) if !filter.trim().is_empty() => Self::default().with_filter(filter),
            _ => Self::default(),
        }
    }

    /// Sets the filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enables or disables JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Enables or disables event targets.
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| ExecflowError::TracingInit(e.to_string()))
    }
}

/// Installs the global subscriber described by `config`.
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init()
    };

    installed.map_err(|e| ExecflowError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::new();
        assert_eq!(config.filter, "info");
        assert!(!config.json);
        assert!(config.with_target);
    }

    #[test]
    fn test_builder() {
        let config = TracingConfig::new()
            .with_filter("execflow=debug")
            .with_json(true)
            .with_target(false);

        assert_eq!(config.filter, "execflow=debug");
        assert!(config.json);
        assert!(!config.with_target);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TracingConfig = serde_json::from_str(r#"{"json":true}"#).unwrap();
        assert_eq!(config, TracingConfig::new().with_json(true));
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = TracingConfig::new()
            .with_filter("execflow=loudest")
            .env_filter()
            .unwrap_err();
        assert_eq!(err.code(), "TRACING_INIT");
    }

    #[test]
    fn test_second_install_fails() {
        let config = TracingConfig::new().with_filter("off");
        let _ = init_tracing(&config);

        let err = init_tracing(&config).unwrap_err();
        assert_eq!(err.code(), "TRACING_INIT");
    }
}
