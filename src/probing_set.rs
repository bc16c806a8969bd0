//! ProbingSet: fixed-capacity open-addressed set with linear probing.

use crate::error::SetError;
use crate::exchange_sort;
use crate::reentrancy::ProbeGuard;
use crate::strategy::{FnStrategy, OrdStrategy, SetStrategy};
use core::cmp::Ordering;
use core::fmt;
use tracing::{debug, error, trace};

/// State of one table slot.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot<T> {
    Empty,
    Occupied(T),
    // Logically deleted; probe chains keep walking past it.
    Tombstoned,
}

/// Outcome of walking an element's probe sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    Found(usize),
    /// Not present; the index is where an insert should land.
    Vacant(usize),
    /// Every slot is occupied by other elements.
    Exhausted,
}

/// Result of [`ProbingSet::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// An equal element is already stored; it was left untouched.
    Duplicate,
    /// The set is at capacity; nothing was stored.
    Full,
}

impl Insertion {
    pub fn is_inserted(self) -> bool {
        self == Insertion::Inserted
    }
}

pub struct ProbingSet<T, S = OrdStrategy> {
    slots: Box<[Slot<T>]>,
    count: usize,
    tombstones: usize,
    strategy: S,
    guard: ProbeGuard,
}

impl<T> ProbingSet<T>
where
    T: Ord + core::hash::Hash,
{
    /// Creates a set holding at most `capacity` elements, compared with
    /// `Ord` and hashed with the default hasher.
    pub fn new(capacity: usize) -> Self {
        Self::with_strategy(capacity, OrdStrategy::default())
    }
}

impl<T, C, H> ProbingSet<T, FnStrategy<C, H>>
where
    C: Fn(&T, &T) -> Ordering,
    H: Fn(&T) -> u64,
{
    /// Creates a set from a comparator and a hash function.
    pub fn from_fns(capacity: usize, compare: C, hash: H) -> Self {
        Self::with_strategy(capacity, FnStrategy::new(compare, hash))
    }
}

impl<T, S> ProbingSet<T, S>
where
    S: SetStrategy<T>,
{
    /// Creates a set holding at most `capacity` elements.
    ///
    /// A capacity of zero gives a set that rejects every insert.
    pub fn with_strategy(capacity: usize, strategy: S) -> Self {
        let slots = (0..capacity).map(|_| Slot::Empty).collect();
        debug!(capacity, "created probing set");
        Self::from_slots(slots, strategy)
    }

    /// Like [`with_strategy`](Self::with_strategy), but reports a failed slot
    /// allocation instead of aborting.
    pub fn try_with_strategy(capacity: usize, strategy: S) -> Result<Self, SetError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| SetError::alloc(capacity, e))?;
        slots.resize_with(capacity, || Slot::Empty);
        debug!(capacity, "created probing set");
        Ok(Self::from_slots(slots.into_boxed_slice(), strategy))
    }

    fn from_slots(slots: Box<[Slot<T>]>, strategy: S) -> Self {
        Self {
            slots,
            count: 0,
            tombstones: 0,
            strategy,
            guard: ProbeGuard::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Number of logically deleted slots still on probe chains.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    // Walks `elt`'s probe sequence. The first tombstone seen is preferred
    // over a later empty slot as the insertion target.
    fn probe(&self, elt: &T) -> Probe {
        let cap = self.slots.len();
        if cap == 0 {
            return Probe::Exhausted;
        }
        let _g = self.guard.enter();
        let origin = (self.strategy.hash(elt) % cap as u64) as usize;
        let mut first_tombstone = None;
        for i in 0..cap {
            let idx = (origin + i) % cap;
            match &self.slots[idx] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(idx)),
                Slot::Occupied(stored) => {
                    if self.strategy.compare(elt, stored) == Ordering::Equal {
                        return Probe::Found(idx);
                    }
                }
                Slot::Tombstoned => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(idx);
                    }
                }
            }
        }
        // No empty slot anywhere: a tombstone is still a valid target since
        // the whole table was searched.
        match first_tombstone {
            Some(idx) => Probe::Vacant(idx),
            None => Probe::Exhausted,
        }
    }

    /// Adds `elt` unless an equal element is present or the set is full.
    ///
    /// Neither a duplicate nor a full set is an error; the returned
    /// [`Insertion`] tells which case applied. A duplicate never replaces the
    /// stored element.
    pub fn insert(&mut self, elt: T) -> Insertion {
        if self.is_full() {
            trace!(capacity = self.capacity(), "insert rejected: set is full");
            return Insertion::Full;
        }
        match self.probe(&elt) {
            Probe::Found(idx) => {
                trace!(slot = idx, "insert skipped: element already present");
                Insertion::Duplicate
            }
            Probe::Vacant(idx) => {
                if matches!(self.slots[idx], Slot::Tombstoned) {
                    self.tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied(elt);
                self.count += 1;
                Insertion::Inserted
            }
            Probe::Exhausted => {
                // count < capacity guarantees a non-occupied slot, so the
                // probe cannot come back empty-handed.
                error!(
                    count = self.count,
                    capacity = self.capacity(),
                    tombstones = self.tombstones,
                    "probe exhausted on a set that is not full"
                );
                if cfg!(debug_assertions) {
                    panic!("probe exhausted with count < capacity");
                }
                Insertion::Full
            }
        }
    }

    /// Removes the element equal to `elt`, leaving a tombstone in its slot.
    /// Returns the stored element, or `None` if nothing matched.
    pub fn remove(&mut self, elt: &T) -> Option<T> {
        let Probe::Found(idx) = self.probe(elt) else {
            return None;
        };
        match core::mem::replace(&mut self.slots[idx], Slot::Tombstoned) {
            Slot::Occupied(v) => {
                self.count -= 1;
                self.tombstones += 1;
                trace!(slot = idx, "tombstoned slot");
                Some(v)
            }
            other => {
                self.slots[idx] = other;
                None
            }
        }
    }

    /// Returns the stored element equal to `elt`.
    pub fn find(&self, elt: &T) -> Option<&T> {
        match self.probe(elt) {
            Probe::Found(idx) => match &self.slots[idx] {
                Slot::Occupied(v) => Some(v),
                Slot::Empty | Slot::Tombstoned => None,
            },
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    pub fn contains(&self, elt: &T) -> bool {
        matches!(self.probe(elt), Probe::Found(_))
    }

    /// Iterates stored elements in slot order, which is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.slots.iter(),
            remaining: self.count,
        }
    }

    /// Returns references to every element, ordered by the strategy's
    /// `compare`. The vector is a fresh allocation owned by the caller.
    pub fn snapshot(&self) -> Result<Vec<&T>, SetError> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.count)
            .map_err(|e| SetError::alloc(self.count, e))?;
        out.extend(self.iter());
        debug_assert_eq!(out.len(), self.count);
        let _g = self.guard.enter();
        exchange_sort::sort(&mut out, |a: &&T, b: &&T| self.strategy.compare(*a, *b));
        Ok(out)
    }

    /// Like [`snapshot`](Self::snapshot), but clones the elements out.
    pub fn to_sorted_vec(&self) -> Result<Vec<T>, SetError>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        out.try_reserve_exact(self.count)
            .map_err(|e| SetError::alloc(self.count, e))?;
        out.extend(self.iter().cloned());
        let _g = self.guard.enter();
        exchange_sort::sort(&mut out, |a: &T, b: &T| self.strategy.compare(a, b));
        Ok(out)
    }

    /// Resets every slot to empty, dropping stored elements.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        debug!(
            dropped = self.count,
            tombstones = self.tombstones,
            "cleared probing set"
        );
        self.count = 0;
        self.tombstones = 0;
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ProbingSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingSet")
            .field("capacity", &self.slots.len())
            .field("len", &self.count)
            .field("tombstones", &self.tombstones)
            .field("slots", &self.slots)
            .finish()
    }
}

/// Iterator over stored elements, in slot order.
pub struct Iter<'a, T> {
    it: core::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.it.by_ref() {
            if let Slot::Occupied(v) = slot {
                self.remaining -= 1;
                return Some(v);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, S> IntoIterator for &'a ProbingSet<T, S>
where
    S: SetStrategy<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
