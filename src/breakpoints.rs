//! Width breakpoint schemes.
//!
//! A scheme turns a width in logical pixels into a discrete class. The
//! classifier is generic over [`Classify`], so the same observation machinery
//! serves the two-class compact/regular split as well as the six-tier grid.

use std::fmt;

use crate::classification::ViewportClass;
use crate::error::BreakpointError;

/// Widths strictly below this are compact.
pub const COMPACT_BELOW: f64 = 768.0;

/// Maps a width to a class.
pub trait Classify {
    type Class: Copy + PartialEq + fmt::Debug + 'static;

    fn classify(&self, width: f64) -> Self::Class;
}

fn check_threshold(value: f64) -> Result<f64, BreakpointError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(BreakpointError::NonFinite { value })
    }
}

/// Splits widths into [`ViewportClass::Compact`] and [`ViewportClass::Regular`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactBreakpoint {
    below: f64,
}

impl Default for CompactBreakpoint {
    fn default() -> Self {
        Self {
            below: COMPACT_BELOW,
        }
    }
}

impl CompactBreakpoint {
    /// Widths strictly below `below` are compact.
    pub fn new(below: f64) -> Result<Self, BreakpointError> {
        Ok(Self {
            below: check_threshold(below)?,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.below
    }
}

impl Classify for CompactBreakpoint {
    type Class = ViewportClass;

    fn classify(&self, width: f64) -> ViewportClass {
        if width < self.below {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

/// A grid tier, from narrowest to widest.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum ScreenSizeBp {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ScreenSizeBp {
    pub const ALL: [ScreenSizeBp; 6] = [
        ScreenSizeBp::Xs,
        ScreenSizeBp::Sm,
        ScreenSizeBp::Md,
        ScreenSizeBp::Lg,
        ScreenSizeBp::Xl,
        ScreenSizeBp::Xxl,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Width breakpoints in pixels.
///
/// Holds the lower bound of every tier above `Xs`; `Xs` covers everything
/// below `sm`, `Xxl` everything from `xxl` up, so every width has a tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBreakpoints {
    starts: [f64; 5],
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            starts: [576.0, 768.0, 992.0, 1200.0, 1400.0],
        }
    }
}

impl GridBreakpoints {
    /// Lower bounds for `Sm`, `Md`, `Lg`, `Xl` and `Xxl`.
    pub fn new(starts: [f64; 5]) -> Result<Self, BreakpointError> {
        let mut prev = None;
        for (index, value) in starts.into_iter().enumerate() {
            check_threshold(value)?;
            if prev.is_some_and(|prev| value <= prev) {
                return Err(BreakpointError::NotAscending { index, value });
            }
            prev = Some(value);
        }
        Ok(Self { starts })
    }

    /// The lowest width belonging to `bp`.
    pub fn start_of(&self, bp: ScreenSizeBp) -> f64 {
        match bp.index() {
            0 => 0.0,
            i => self.starts[i - 1],
        }
    }

    pub fn get_width_bp(&self, width: f64) -> ScreenSizeBp {
        let passed = self.starts.partition_point(|start| *start <= width);
        ScreenSizeBp::ALL[passed]
    }
}

impl Classify for GridBreakpoints {
    type Class = ScreenSizeBp;

    fn classify(&self, width: f64) -> ScreenSizeBp {
        self.get_width_bp(width)
    }
}
