//! The host display boundary.
//!
//! A [`Surface`] reports the current width of whatever the UI is drawn on and
//! notifies registered listeners when it changes. Listeners are held weakly:
//! the surface never keeps an observer alive, and a listener whose owner is
//! gone is skipped and pruned on the next dispatch.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::dispatch::DispatchGuard;

new_key_type! {
    /// Handle to a listener registered with a [`Surface`].
    pub struct ListenerId;
}

/// Callback invoked with the new width, or `None` once no display is attached.
pub type ResizeFn = dyn Fn(Option<f64>);

/// A weakly held resize callback.
pub type ResizeListener = Weak<ResizeFn>;

/// A host that can report its width and announce changes.
///
/// Listeners may be called synchronously, even from inside another listener;
/// observations queue such nested deliveries themselves.
pub trait Surface {
    /// The current width in logical pixels, `None` when there is no display.
    fn width(&self) -> Option<f64>;

    /// Register a listener for width changes.
    fn listen(&self, listener: ResizeListener) -> ListenerId;

    /// Remove a listener. Unknown or already removed ids are ignored.
    fn unlisten(&self, id: ListenerId);
}

impl<S: Surface + ?Sized> Surface for Rc<S> {
    fn width(&self) -> Option<f64> {
        (**self).width()
    }

    fn listen(&self, listener: ResizeListener) -> ListenerId {
        (**self).listen(listener)
    }

    fn unlisten(&self, id: ListenerId) {
        (**self).unlisten(id)
    }
}

/// A surface with no display, e.g. when rendering ahead of time.
///
/// It never reports a width and never emits changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Surface for Headless {
    fn width(&self) -> Option<f64> {
        None
    }

    fn listen(&self, _listener: ResizeListener) -> ListenerId {
        ListenerId::default()
    }

    fn unlisten(&self, _id: ListenerId) {}
}

/// A surface driven by its owner.
///
/// The embedding shell forwards its window resize events through
/// [`ManualSurface::resize`]. Clones share the same state, so one handle can be
/// handed to a classifier while another keeps feeding sizes.
#[derive(Clone, Default)]
pub struct ManualSurface {
    inner: Rc<SurfaceInner>,
}

#[derive(Default)]
struct SurfaceInner {
    width: Cell<Option<f64>>,
    listeners: RefCell<SlotMap<ListenerId, ResizeListener>>,
    dispatching: Cell<bool>,
    pending: Cell<bool>,
}

impl fmt::Debug for ManualSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualSurface")
            .field("width", &self.inner.width.get())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl ManualSurface {
    /// A surface that has not been measured yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(width: f64) -> Self {
        let surface = Self::default();
        surface.inner.width.set(Some(width));
        surface
    }

    /// Set the width and notify listeners.
    pub fn resize(&self, width: f64) {
        self.inner.width.set(Some(width));
        self.dispatch();
    }

    /// Drop the display; listeners are told the width is gone.
    pub fn detach(&self) {
        self.inner.width.set(None);
        self.dispatch();
    }

    /// Number of listeners whose owners are still alive.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .borrow()
            .values()
            .filter(|listener| listener.strong_count() > 0)
            .count()
    }

    fn dispatch(&self) {
        let inner = &self.inner;
        let Some(_round) = DispatchGuard::enter(&inner.dispatching) else {
            // Delivered by the outer loop once the current round finishes.
            inner.pending.set(true);
            return;
        };
        loop {
            inner.pending.set(false);
            let width = inner.width.get();
            let listeners: SmallVec<[Rc<ResizeFn>; 4]> = {
                let mut listeners = inner.listeners.borrow_mut();
                listeners.retain(|_, listener| listener.strong_count() > 0);
                listeners.values().filter_map(Weak::upgrade).collect()
            };
            for listener in listeners {
                listener(width);
            }
            if !inner.pending.get() {
                break;
            }
        }
    }
}

impl Surface for ManualSurface {
    fn width(&self) -> Option<f64> {
        self.inner.width.get()
    }

    fn listen(&self, listener: ResizeListener) -> ListenerId {
        self.inner.listeners.borrow_mut().insert(listener)
    }

    fn unlisten(&self, id: ListenerId) {
        self.inner.listeners.borrow_mut().remove(id);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        panic::{self, AssertUnwindSafe},
        rc::Rc,
    };

    use super::{Headless, ManualSurface, ResizeFn, Surface};

    fn recorder() -> (Rc<RefCell<Vec<Option<f64>>>>, Rc<ResizeFn>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener: Rc<ResizeFn> = Rc::new({
            let seen = seen.clone();
            move |width| seen.borrow_mut().push(width)
        });
        (seen, listener)
    }

    #[test]
    fn headless_has_no_width() {
        let (seen, listener) = recorder();
        let id = Headless.listen(Rc::downgrade(&listener));
        assert_eq!(Headless.width(), None);
        Headless.unlisten(id);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn resize_reaches_listener() {
        let surface = ManualSurface::with_width(320.0);
        let (seen, listener) = recorder();
        surface.listen(Rc::downgrade(&listener));

        surface.resize(500.0);
        surface.detach();
        assert_eq!(*seen.borrow(), [Some(500.0), None]);
        assert_eq!(surface.width(), None);
    }

    #[test]
    fn unlisten_stops_delivery() {
        let surface = ManualSurface::new();
        let (seen, listener) = recorder();
        let id = surface.listen(Rc::downgrade(&listener));
        surface.unlisten(id);
        surface.unlisten(id);

        surface.resize(800.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn dropped_listener_is_pruned() {
        let surface = ManualSurface::new();
        let (seen, listener) = recorder();
        surface.listen(Rc::downgrade(&listener));
        assert_eq!(surface.listener_count(), 1);

        drop(listener);
        assert_eq!(surface.listener_count(), 0);
        surface.resize(800.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn nested_resize_is_delivered_after_current_round() {
        let surface = ManualSurface::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first: Rc<ResizeFn> = Rc::new({
            let seen = seen.clone();
            let surface = surface.clone();
            move |width| {
                seen.borrow_mut().push(("first", width));
                if width == Some(100.0) {
                    surface.resize(900.0);
                }
            }
        });
        let second: Rc<ResizeFn> = Rc::new({
            let seen = seen.clone();
            move |width| seen.borrow_mut().push(("second", width))
        });
        surface.listen(Rc::downgrade(&first));
        surface.listen(Rc::downgrade(&second));

        surface.resize(100.0);
        assert_eq!(
            *seen.borrow(),
            [
                ("first", Some(100.0)),
                ("second", Some(100.0)),
                ("first", Some(900.0)),
                ("second", Some(900.0)),
            ]
        );
    }

    #[test]
    fn panicking_listener_does_not_stall_later_resizes() {
        let surface = ManualSurface::with_width(700.0);
        let failing: Rc<ResizeFn> = Rc::new(|width: Option<f64>| {
            if width.is_some() {
                panic!("listener failed");
            }
        });
        surface.listen(Rc::downgrade(&failing));

        let result = panic::catch_unwind(AssertUnwindSafe(|| surface.resize(800.0)));
        assert!(result.is_err());
        drop(failing);

        let (seen, listener) = recorder();
        surface.listen(Rc::downgrade(&listener));
        surface.resize(300.0);
        assert_eq!(*seen.borrow(), [Some(300.0)]);
    }
}
