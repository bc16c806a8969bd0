//! Debug-only probe guard.
//!
//! The set calls into user code (the strategy's `compare` and `hash`) while
//! walking a probe sequence. A callback that reaches back into the same set
//! during that walk is a contract violation. In debug builds the second entry
//! panics; in release builds the guard compiles away.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-set probe tracker. Entry points take `let _g = self.guard.enter();`.
#[derive(Debug)]
pub(crate) struct ProbeGuard {
    #[cfg(debug_assertions)]
    active: Cell<bool>,
    // !Send + !Sync: the set provides no internal synchronization.
    _nosend: PhantomData<*mut ()>,
}

impl ProbeGuard {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(false),
            _nosend: PhantomData,
        }
    }

    /// Marks the set as probing. Panics in debug builds if it already is.
    #[inline]
    pub(crate) fn enter(&self) -> ProbeScope<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.active.get(),
                "strategy callback re-entered the set during a probe"
            );
            self.active.set(true);
            ProbeScope { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            ProbeScope { _z: PhantomData }
        }
    }
}

impl Default for ProbeGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII scope returned by [`ProbeGuard::enter`].
pub(crate) struct ProbeScope<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ProbeGuard,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl Drop for ProbeScope<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.owner.active.get());
            self.owner.active.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProbeGuard;

    #[test]
    fn sequential_scopes_are_ok() {
        let g = ProbeGuard::new();
        {
            let _s = g.enter();
        }
        let _s = g.enter();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_scope_panics_in_debug() {
        let g = ProbeGuard::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _outer = g.enter();
            let _inner = g.enter();
        }));
        assert!(res.is_err(), "expected nested probe to panic in debug builds");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nested_scope_is_noop_in_release() {
        let g = ProbeGuard::new();
        let _outer = g.enter();
        let _inner = g.enter();
    }
}
