use std::cell::Cell;

/// Marks a delivery round as running.
///
/// The flag is cleared when the guard drops, including while unwinding out
/// of a panicking callback, so later rounds are never locked out.
pub(crate) struct DispatchGuard<'a> {
    running: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    /// `None` if a round is already running on this flag.
    pub(crate) fn enter(running: &'a Cell<bool>) -> Option<Self> {
        if running.replace(true) {
            return None;
        }
        Some(Self { running })
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.running.set(false);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        panic::{self, AssertUnwindSafe},
    };

    use super::DispatchGuard;

    #[test]
    fn nested_enter_is_refused() {
        let running = Cell::new(false);
        let outer = DispatchGuard::enter(&running);
        assert!(outer.is_some());
        assert!(DispatchGuard::enter(&running).is_none());
        drop(outer);
        assert!(!running.get());
    }

    #[test]
    fn cleared_on_unwind() {
        let running = Cell::new(false);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = DispatchGuard::enter(&running);
            panic!("callback failed");
        }));
        assert!(result.is_err());
        assert!(!running.get());
    }
}
