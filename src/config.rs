//! Breakpoint configuration loaded from JSON.
//!
//! ```json
//! { "compact_below": 768, "grid": [576, 768, 992, 1200, 1400] }
//! ```
//!
//! Both keys are optional; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    breakpoints::{COMPACT_BELOW, CompactBreakpoint, GridBreakpoints},
    classifier::ViewportClassifier,
    error::{BreakpointError, ConfigError},
    surface::Surface,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Widths strictly below this are compact.
    pub compact_below: f64,
    /// Lower bounds of the `sm`..`xxl` grid tiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<[f64; 5]>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            compact_below: COMPACT_BELOW,
            grid: None,
        }
    }
}

impl ViewportConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), BreakpointError> {
        self.compact_breakpoint()?;
        self.grid_breakpoints()?;
        Ok(())
    }

    pub fn compact_breakpoint(&self) -> Result<CompactBreakpoint, BreakpointError> {
        CompactBreakpoint::new(self.compact_below)
    }

    pub fn grid_breakpoints(&self) -> Result<GridBreakpoints, BreakpointError> {
        match self.grid {
            Some(starts) => GridBreakpoints::new(starts),
            None => Ok(GridBreakpoints::default()),
        }
    }

    /// A compact/regular classifier over `surface` using these thresholds.
    pub fn classifier<S: Surface + 'static>(
        &self,
        surface: S,
    ) -> Result<ViewportClassifier<S>, ConfigError> {
        let breakpoint = self.compact_breakpoint()?;
        Ok(ViewportClassifier::with_breakpoints(surface, breakpoint))
    }
}
