//! Structured logging setup for the `valobj` binary.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the application. This module provides the binary's subscriber:
//! - JSON formatting for machine consumption
//! - Pretty or compact formatting for terminals
//! - Filter directives from `VALOBJ_LOG`, then `RUST_LOG`
//!
//! Logs always go to stderr so command output on stdout stays parseable.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";

/// Configuration for logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directives, e.g. `"valobj=debug"`
    pub filter: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line human-readable output
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Create a logging configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create a logging configuration from an arbitrary key lookup.
    ///
    /// Recognized keys: `VALOBJ_LOG_FORMAT` (json, pretty, compact) and
    /// `VALOBJ_LOG`, falling back to `RUST_LOG`. Unrecognized formats keep
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup("VALOBJ_LOG_FORMAT").as_deref().and_then(LogFormat::parse) {
            config.format = format;
        }

        if let Some(filter) = lookup("VALOBJ_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
        {
            config.filter = filter;
        }

        config
    }

    /// Raises the filter to `debug` for this crate when `verbose` is set.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.filter = format!("{},valobj=debug", self.filter);
        }
        self
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid log filter '{}'", self.filter))
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
/// Fails on an invalid filter or if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry();

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .with_current_span(true)
                .with_filter(env_filter);
            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to install log subscriber")?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_target(true)
                .with_filter(env_filter);
            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to install log subscriber")?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter);
            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to install log subscriber")?;
        }
    }

    tracing::debug!(format = ?config.format, filter = %config.filter, "logging initialized");
    Ok(())
}
