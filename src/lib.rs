//! # floem_viewport
//! Responsive viewport classification for Floem-style UIs.
//!
//! A [`ViewportClassifier`] watches the width of a [`Surface`] and sorts it
//! into a small set of classes: `Compact` below 768 logical pixels and
//! `Regular` from there up, or the six grid tiers of [`GridBreakpoints`].
//!
//! ```rust
//! use floem_viewport::{Classification, ManualSurface, Responsive, ViewportClassifier};
//!
//! let surface = ManualSurface::new();
//! let classifier = ViewportClassifier::new(surface.clone());
//! let skeleton_height = Responsive::new(120.0, 200.0, 160.0);
//!
//! let observation = classifier.observe();
//! // Nothing has been measured yet.
//! assert_eq!(observation.current(), Classification::Unknown);
//! assert_eq!(*skeleton_height.resolve(observation.current()), 160.0);
//!
//! surface.resize(500.0);
//! assert_eq!(*skeleton_height.resolve(observation.current()), 120.0);
//! ```
//!
//! ## Lifecycle
//! Every [`observe`](ViewportClassifier::observe) registers exactly one
//! listener with the surface. The surface only holds it weakly; the
//! [`Observation`] owns it and releases it when disposed or dropped.
//! [`Observation::subscribe`] hands back a [`Disposer`] which, likewise,
//! unsubscribes on [`dispose`](Disposer::dispose) or drop and may be disposed
//! any number of times.
//!
//! ## Unknown
//! Without a display there is no width. The classification is then
//! [`Classification::Unknown`] rather than a guess, and callers choose what to
//! render for it, for instance through [`Responsive::unknown`].
//!
//! ## Threads
//! Everything here is `!Send` and meant to live on the UI thread. Resize
//! delivery is synchronous; a resize triggered from inside a callback is
//! delivered after the current round completes.

pub mod breakpoints;
pub mod classification;
pub mod classifier;
#[cfg(feature = "serde")]
pub mod config;
mod dispatch;
pub mod disposer;
pub mod error;
pub mod responsive;
pub mod screen_size;
pub mod surface;

pub use breakpoints::{COMPACT_BELOW, Classify, CompactBreakpoint, GridBreakpoints, ScreenSizeBp};
pub use classification::{Classification, ViewportClass};
pub use classifier::{Observation, Subscription, ViewportClassifier};
#[cfg(feature = "serde")]
pub use config::ViewportConfig;
pub use disposer::Disposer;
pub use error::{BreakpointError, ConfigError};
pub use responsive::{Responsive, ResponsiveRules};
pub use screen_size::{ScreenSize, SizeFlags, range};
pub use surface::{Headless, ListenerId, ManualSurface, ResizeFn, ResizeListener, Surface};
