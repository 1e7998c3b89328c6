//! Console logging setup.
//!
//! ```ignore
//! use contactpage_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("contactpage=debug,contactpage_core=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a filter is given
pub const DEFAULT_FILTER: &str = "info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
    with_target: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
            with_target: true,
        }
    }

    /// Set the filter (e.g., "contactpage=info,contactpage_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors (for log files or dumb terminals).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Omit event targets from console lines.
    pub fn no_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Filter the subscriber will use.
    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER))
        })
    }

    /// Install the subscriber globally.
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> Result<(), TryInitError> {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(self.ansi)
            .with_target(self.with_target);

        tracing_subscriber::registry()
            .with(self.build_filter())
            .with(fmt_layer)
            .try_init()
    }
}
