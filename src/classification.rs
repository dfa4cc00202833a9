use std::fmt;

/// The two layout classes a viewport can fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportClass {
    Compact,
    Regular,
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportClass::Compact => f.write_str("compact"),
            ViewportClass::Regular => f.write_str("regular"),
        }
    }
}

/// The classification of a viewport as seen by an observer.
///
/// `Unknown` is reported until the surface can produce a real width, for
/// example while rendering without any display attached. It is a valid state
/// and should not be confused with either measured class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification<C = ViewportClass> {
    Unknown,
    Measured(C),
}

impl<C> Default for Classification<C> {
    fn default() -> Self {
        Classification::Unknown
    }
}

impl<C: Copy> Classification<C> {
    pub fn is_known(&self) -> bool {
        matches!(self, Classification::Measured(_))
    }

    /// The measured class, if any.
    pub fn known(&self) -> Option<C> {
        match self {
            Classification::Unknown => None,
            Classification::Measured(class) => Some(*class),
        }
    }

    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Classification<D> {
        match self {
            Classification::Unknown => Classification::Unknown,
            Classification::Measured(class) => Classification::Measured(f(class)),
        }
    }
}

impl Classification<ViewportClass> {
    /// Whether the viewport was measured as compact.
    ///
    /// `Unknown` answers `false`: an unmeasured viewport is laid out as regular
    /// by callers that only ask this yes/no question.
    pub fn is_compact(&self) -> bool {
        matches!(self, Classification::Measured(ViewportClass::Compact))
    }
}

impl<C> From<Option<C>> for Classification<C> {
    fn from(value: Option<C>) -> Self {
        match value {
            Some(class) => Classification::Measured(class),
            None => Classification::Unknown,
        }
    }
}
