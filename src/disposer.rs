use std::{cell::RefCell, fmt};

/// Releases a registration when disposed or dropped.
///
/// Disposing runs the release at most once; further calls do nothing.
#[must_use = "dropping a Disposer releases the registration immediately"]
pub struct Disposer {
    release: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Disposer {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: RefCell::new(Some(Box::new(release))),
        }
    }

    /// A disposer with nothing to release.
    pub fn noop() -> Self {
        Self {
            release: RefCell::new(None),
        }
    }

    pub fn dispose(&self) {
        // Taken before running so a release that reaches back here is a no-op.
        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            release();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.release.borrow().is_none()
    }

    /// Give up the handle without releasing.
    ///
    /// The registration then lives as long as whatever it was registered with.
    pub fn detach(self) {
        self.release.borrow_mut().take();
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
