//! probing-set: a fixed-capacity, open-addressed hash set with linear
//! probing and tombstone deletion, plus the partition-exchange sort it uses
//! to hand out ordered snapshots.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small set whose probe/tombstone policy is explicit and easy to
//!   verify, over element types the set knows nothing about.
//! - Pieces:
//!   - ProbingSet<T, S>: the table. A boxed slice of slots, each
//!     `Empty | Occupied(T) | Tombstoned`, sized once at construction.
//!   - SetStrategy<T>: the element semantics (`compare` and `hash`),
//!     supplied by the caller. `FnStrategy` wraps two closures,
//!     `OrdStrategy` uses `Ord + Hash`.
//!   - exchange_sort: in-place quicksort with a last-element pivot, used to
//!     order snapshots.
//!
//! Probing
//! - The origin is `hash(elt) % capacity`; later probes step by one,
//!   wrapping, for at most `capacity` slots.
//! - An empty slot ends the search. Tombstones do not: they are skipped, and
//!   the first one seen becomes the insertion target in preference to the
//!   empty slot that ended the walk.
//! - Removal writes a tombstone rather than an empty slot, so chains of other
//!   elements that pass through the slot stay intact.
//!
//! Constraints
//! - Fixed capacity: no growth, no rehashing. Inserting into a full set is a
//!   no-op reported as `Insertion::Full`, not an error.
//! - Single-threaded: the set is `!Send`/`!Sync` and takes no locks.
//! - Reentrancy: strategy callbacks must not call back into the same set;
//!   debug builds panic if they do.
//! - The strategy must stay consistent for the set's lifetime.
//!
//! Ownership
//! - The set owns the `T` values in its slots. To keep element ownership with
//!   the caller, store references (`&E`, `Rc<E>`); dropping the set then
//!   releases only its slot array.

pub mod error;
pub mod exchange_sort;
pub mod probing_set;
mod probing_set_proptest;
mod reentrancy;
pub mod strategy;

// Public surface
pub use error::SetError;
pub use probing_set::{Insertion, Iter, ProbingSet};
pub use strategy::{FnStrategy, OrdStrategy, SetStrategy};
