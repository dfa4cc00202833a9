//! Picking layout values from a classification.
//!
//! Layout code usually needs a constant per class, such as a placeholder
//! height that is shorter on compact screens. These helpers make the choice
//! for `Unknown` explicit instead of letting it default silently.

use crate::{
    breakpoints::ScreenSizeBp,
    classification::{Classification, ViewportClass},
    screen_size::ScreenSize,
};

/// One value per [`ViewportClass`], plus the value used before measuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Responsive<T> {
    pub compact: T,
    pub regular: T,
    pub unknown: T,
}

impl<T> Responsive<T> {
    pub fn new(compact: T, regular: T, unknown: T) -> Self {
        Self {
            compact,
            regular,
            unknown,
        }
    }

    pub fn get(&self, class: ViewportClass) -> &T {
        match class {
            ViewportClass::Compact => &self.compact,
            ViewportClass::Regular => &self.regular,
        }
    }

    pub fn resolve(&self, classification: Classification) -> &T {
        match classification {
            Classification::Unknown => &self.unknown,
            Classification::Measured(class) => self.get(class),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        Responsive {
            compact: f(self.compact),
            regular: f(self.regular),
            unknown: f(self.unknown),
        }
    }
}

impl<T: Clone> Responsive<T> {
    /// Before measuring, fall back to the regular value.
    pub fn regular_first(compact: T, regular: T) -> Self {
        Self::new(compact, regular.clone(), regular)
    }

    pub fn uniform(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value)
    }
}

/// Values keyed by sets of grid tiers; the first matching rule wins.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveRules<T> {
    rules: Vec<(ScreenSize, T)>,
    fallback: T,
}

impl<T> ResponsiveRules<T> {
    /// `fallback` applies when no rule matches or the tier is unknown.
    pub fn new(fallback: T) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn when(mut self, size: ScreenSize, value: T) -> Self {
        self.rules.push((size, value));
        self
    }

    pub fn get(&self, bp: ScreenSizeBp) -> &T {
        self.rules
            .iter()
            .find(|(size, _)| size.contains(bp))
            .map(|(_, value)| value)
            .unwrap_or(&self.fallback)
    }

    pub fn resolve(&self, classification: Classification<ScreenSizeBp>) -> &T {
        match classification {
            Classification::Unknown => &self.fallback,
            Classification::Measured(bp) => self.get(bp),
        }
    }
}
