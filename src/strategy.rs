//! Pluggable element semantics.
//!
//! A [`ProbingSet`](crate::ProbingSet) never looks inside its elements. Both
//! deduplication and ordering go through a [`SetStrategy`], and the probe
//! origin comes from its `hash`. The strategy must stay consistent for the
//! lifetime of the set: changing either function after insertion breaks
//! probe-chain placement.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Comparison and hashing for elements of type `T`.
pub trait SetStrategy<T: ?Sized> {
    /// Total order over elements. `Equal` means "same element" for the set.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Probe origin source; the set reduces it modulo its capacity.
    fn hash(&self, elt: &T) -> u64;
}

impl<T: ?Sized, St: SetStrategy<T> + ?Sized> SetStrategy<T> for &St {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }

    #[inline]
    fn hash(&self, elt: &T) -> u64 {
        (**self).hash(elt)
    }
}

/// Strategy built from a pair of closures, one for `compare` and one for `hash`.
#[derive(Clone, Copy)]
pub struct FnStrategy<C, H> {
    compare: C,
    hash: H,
}

impl<C, H> FnStrategy<C, H> {
    pub fn new(compare: C, hash: H) -> Self {
        Self { compare, hash }
    }
}

impl<C, H> fmt::Debug for FnStrategy<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy").finish_non_exhaustive()
    }
}

impl<T, C, H> SetStrategy<T> for FnStrategy<C, H>
where
    T: ?Sized,
    C: Fn(&T, &T) -> Ordering,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    #[inline]
    fn hash(&self, elt: &T) -> u64 {
        (self.hash)(elt)
    }
}

/// Strategy for element types that already know how to order and hash
/// themselves: `compare` is [`Ord::cmp`] and `hash` runs the element's
/// [`Hash`] impl through `S`.
///
/// For reference element types (`&E`, `Rc<E>`) this compares and hashes the
/// pointed-to value, not the address.
#[derive(Clone, Debug, Default)]
pub struct OrdStrategy<S = DefaultHashBuilder> {
    hasher: S,
}

impl<S> OrdStrategy<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

impl<T, S> SetStrategy<T> for OrdStrategy<S>
where
    T: ?Sized + Ord + Hash,
    S: BuildHasher,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn hash(&self, elt: &T) -> u64 {
        self.hasher.hash_one(elt)
    }
}
