//! Errors raised while building breakpoints or loading viewport configuration.
//!
//! Observing a viewport never fails; these only surface at construction time.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid breakpoint thresholds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreakpointError {
    /// A threshold was NaN, infinite or negative.
    #[error("breakpoint threshold must be a finite, non-negative width")]
    NonFinite {
        /// Offending threshold.
        value: f64,
    },
    /// Grid thresholds must strictly increase from `sm` to `xxl`.
    #[error("grid breakpoints must be strictly ascending")]
    NotAscending {
        /// Index of the first threshold that is not above its predecessor.
        index: usize,
        /// Offending threshold.
        value: f64,
    },
}

/// Failures while loading a [`ViewportConfig`](crate::config::ViewportConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("viewport config io failure")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration was not valid JSON for the expected shape.
    #[cfg(feature = "serde")]
    #[error("viewport config json failure")]
    Json {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
    /// The configured thresholds are invalid.
    #[error("viewport config has invalid breakpoints")]
    Breakpoint {
        #[from]
        source: BreakpointError,
    },
}
