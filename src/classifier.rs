//! Observing the viewport class of a [`Surface`].
//!
//! Each [`ViewportClassifier::observe`] call registers one resize listener
//! with the surface and hands back an [`Observation`] that owns it. The
//! observation computes its classification as soon as it is created and,
//! from then on, re-evaluates on every resize. Subscribers only hear about
//! actual class changes, in the order they subscribed.
//!
//! ```rust
//! use floem_viewport::{Classification, ManualSurface, ViewportClass, ViewportClassifier};
//!
//! let surface = ManualSurface::with_width(700.0);
//! let classifier = ViewportClassifier::new(surface.clone());
//!
//! let observation = classifier.observe();
//! assert_eq!(observation.current(), Classification::Measured(ViewportClass::Compact));
//!
//! let _disposer = observation.subscribe(|class| println!("now {class:?}"));
//! surface.resize(800.0);
//! assert_eq!(observation.current(), Classification::Measured(ViewportClass::Regular));
//! ```

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    breakpoints::{Classify, CompactBreakpoint},
    classification::{Classification, ViewportClass},
    dispatch::DispatchGuard,
    disposer::Disposer,
    surface::{ResizeFn, Surface},
};

type Callback<C> = Rc<dyn Fn(Classification<C>)>;

/// Classifies a surface's width and lets consumers observe it.
pub struct ViewportClassifier<S, B = CompactBreakpoint> {
    surface: Rc<S>,
    breakpoints: B,
}

impl<S: Surface + 'static> ViewportClassifier<S> {
    /// A classifier with the default compact/regular split at 768px.
    pub fn new(surface: S) -> Self {
        Self::with_breakpoints(surface, CompactBreakpoint::default())
    }
}

impl<S, B> ViewportClassifier<S, B>
where
    S: Surface + 'static,
    B: Classify + Clone + 'static,
{
    pub fn with_breakpoints(surface: S, breakpoints: B) -> Self {
        Self {
            surface: Rc::new(surface),
            breakpoints,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn breakpoints(&self) -> &B {
        &self.breakpoints
    }

    pub fn classify(&self, width: f64) -> B::Class {
        self.breakpoints.classify(width)
    }

    /// The classification right now, without registering anything.
    pub fn current(&self) -> Classification<B::Class> {
        measure(&self.breakpoints, self.surface.width())
    }

    /// Start observing the surface.
    ///
    /// The returned observation owns one listener on the surface until it is
    /// disposed or dropped.
    pub fn observe(&self) -> Observation<B::Class> {
        let state = Rc::new(ObservationState {
            current: Cell::new(self.current()),
            subscribers: RefCell::new(IndexMap::new()),
            next_key: Cell::new(0),
            dispatching: Cell::new(false),
            pending: Cell::new(None),
        });

        let listener: Rc<ResizeFn> = Rc::new({
            let state = state.clone();
            let breakpoints = self.breakpoints.clone();
            move |width| state.update(measure(&breakpoints, width))
        });
        let id = self.surface.listen(Rc::downgrade(&listener));
        debug!(?id, current = ?state.current.get(), "viewport listener registered");

        let release = Disposer::new({
            let surface = self.surface.clone();
            let state = state.clone();
            move || {
                surface.unlisten(id);
                drop(listener);
                state.subscribers.borrow_mut().clear();
                debug!(?id, "viewport listener released");
            }
        });

        Observation { state, release }
    }

    /// Observe and subscribe in one step.
    ///
    /// Disposing the returned subscription releases both the callback and the
    /// surface listener.
    pub fn watch(
        &self,
        callback: impl Fn(Classification<B::Class>) + 'static,
    ) -> Subscription<B::Class> {
        let observation = self.observe();
        let disposer = observation.subscribe(callback);
        Subscription {
            observation,
            disposer,
        }
    }
}

impl<S: fmt::Debug, B: fmt::Debug> fmt::Debug for ViewportClassifier<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("surface", &self.surface)
            .field("breakpoints", &self.breakpoints)
            .finish()
    }
}

/// Widths that are not finite or are negative count as no measurement.
fn measure<B: Classify>(breakpoints: &B, width: Option<f64>) -> Classification<B::Class> {
    width
        .filter(|width| width.is_finite() && *width >= 0.0)
        .map(|width| breakpoints.classify(width))
        .into()
}

struct ObservationState<C: 'static> {
    current: Cell<Classification<C>>,
    subscribers: RefCell<IndexMap<u64, Callback<C>>>,
    next_key: Cell<u64>,
    dispatching: Cell<bool>,
    pending: Cell<Option<Classification<C>>>,
}

impl<C: Copy + PartialEq + fmt::Debug + 'static> ObservationState<C> {
    fn update(&self, mut next: Classification<C>) {
        let Some(_round) = DispatchGuard::enter(&self.dispatching) else {
            // A callback resized the surface; deliver after this round so
            // every subscriber sees the values in the same order.
            self.pending.set(Some(next));
            return;
        };
        // Anything left over belongs to a round that unwound.
        self.pending.set(None);

        loop {
            self.deliver(next);
            match self.pending.take() {
                Some(queued) => next = queued,
                None => break,
            }
        }
    }

    fn deliver(&self, next: Classification<C>) {
        let prev = self.current.replace(next);
        if prev == next {
            trace!(?next, "viewport resized within the same class");
            return;
        }
        debug!(?prev, ?next, "viewport class changed");

        let subscribers: SmallVec<[(u64, Callback<C>); 4]> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(key, callback)| (*key, callback.clone()))
            .collect();
        for (key, callback) in subscribers {
            // Skip anything disposed by an earlier callback in this round.
            if self.subscribers.borrow().contains_key(&key) {
                callback(next);
            }
        }
    }

    fn insert(&self, callback: Callback<C>) -> u64 {
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        self.subscribers.borrow_mut().insert(key, callback);
        key
    }
}

/// A live observation of a surface's classification.
///
/// Dropping it releases the surface listener and silences its subscribers.
#[must_use = "dropping an Observation stops observing immediately"]
pub struct Observation<C: 'static = ViewportClass> {
    state: Rc<ObservationState<C>>,
    release: Disposer,
}

impl<C: Copy + PartialEq + fmt::Debug + 'static> Observation<C> {
    /// The latest classification; `Unknown` until the surface has a width.
    pub fn current(&self) -> Classification<C> {
        self.state.current.get()
    }

    /// Call `callback` with every classification change from now on.
    ///
    /// The callback is not invoked for the current value. It is held only by
    /// this observation, so it goes away with either the returned disposer or
    /// the observation itself.
    pub fn subscribe(&self, callback: impl Fn(Classification<C>) + 'static) -> Disposer {
        if self.is_disposed() {
            return Disposer::noop();
        }
        let key = self.state.insert(Rc::new(callback));
        let state: Weak<ObservationState<C>> = Rc::downgrade(&self.state);
        Disposer::new(move || {
            if let Some(state) = state.upgrade() {
                state.subscribers.borrow_mut().shift_remove(&key);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }

    /// Stop observing. Safe to call more than once.
    pub fn dispose(&self) {
        self.release.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.release.is_disposed()
    }
}

impl<C: fmt::Debug + Copy + 'static> fmt::Debug for Observation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("current", &self.state.current.get())
            .field("subscribers", &self.state.subscribers.borrow().len())
            .field("disposed", &self.release.is_disposed())
            .finish()
    }
}

/// An observation with a single subscriber, as returned by
/// [`ViewportClassifier::watch`].
#[must_use = "dropping a Subscription stops observing immediately"]
pub struct Subscription<C: 'static = ViewportClass> {
    observation: Observation<C>,
    disposer: Disposer,
}

impl<C: Copy + PartialEq + fmt::Debug + 'static> Subscription<C> {
    pub fn current(&self) -> Classification<C> {
        self.observation.current()
    }

    pub fn dispose(&self) {
        self.disposer.dispose();
        self.observation.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.observation.is_disposed()
    }
}

impl<C: fmt::Debug + Copy + 'static> fmt::Debug for Subscription<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("observation", &self.observation)
            .finish()
    }
}
