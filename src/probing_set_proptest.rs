#![cfg(test)]

// Property tests for ProbingSet kept inside the crate so they can check slot
// accounting that the public API does not expose.

use crate::probing_set::{Insertion, ProbingSet};
use crate::strategy::{FnStrategy, OrdStrategy, SetStrategy};
use core::cmp::Ordering;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations so shrinking walks toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize),
    Remove(usize),
    Find(usize),
    Snapshot,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<u32>, Vec<Op>)> {
    (0usize..=12, proptest::collection::vec(0u32..64, 1..=16)).prop_flat_map(|(cap, pool)| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            3 => idx.clone().prop_map(Op::Insert),
            2 => idx.clone().prop_map(Op::Remove),
            2 => idx.prop_map(Op::Find),
            1 => Just(Op::Snapshot),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Drives `sut` and a BTreeSet model with the same operations.
// Invariants checked after every step:
// - Insert outcome matches the model: Full exactly when len == capacity,
//   Duplicate exactly when the element is present, Inserted otherwise.
// - `find`/`contains`/`remove` agree with the model, including after
//   tombstones have been left on probe chains.
// - `snapshot` equals the model's ascending order and leaves `len` alone.
// - Slot accounting: len + tombstones <= capacity, iter yields len items.
fn run<S: SetStrategy<u32>>(
    mut sut: ProbingSet<u32, S>,
    pool: &[u32],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let cap = sut.capacity();
    let mut model: BTreeSet<u32> = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(i) => {
                let v = pool[i];
                let expected = if model.len() == cap {
                    Insertion::Full
                } else if model.contains(&v) {
                    Insertion::Duplicate
                } else {
                    Insertion::Inserted
                };
                prop_assert_eq!(sut.insert(v), expected);
                if expected == Insertion::Inserted {
                    model.insert(v);
                }
            }
            Op::Remove(i) => {
                let v = pool[i];
                let removed = sut.remove(&v);
                prop_assert_eq!(removed, model.take(&v));
            }
            Op::Find(i) => {
                let v = pool[i];
                prop_assert_eq!(sut.find(&v).copied(), model.get(&v).copied());
                prop_assert_eq!(sut.contains(&v), model.contains(&v));
            }
            Op::Snapshot => {
                let snap: Vec<u32> = sut.snapshot().unwrap().into_iter().copied().collect();
                let expected: Vec<u32> = model.iter().copied().collect();
                prop_assert_eq!(snap, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_full(), model.len() == cap);
        prop_assert!(sut.len() + sut.tombstones() <= cap);
        prop_assert_eq!(sut.iter().count(), model.len());
    }

    // Round trip: every pool element is present iff the model holds it.
    for v in pool {
        prop_assert_eq!(sut.contains(v), model.contains(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let strategy: OrdStrategy = OrdStrategy::default();
        run(ProbingSet::with_strategy(cap, strategy), &pool, ops)?;
    }

    // Every element hashes to the same origin, so each probe walks one long
    // chain through occupied and tombstoned slots.
    #[test]
    fn prop_state_machine_with_collisions((cap, pool, ops) in arb_scenario()) {
        let strategy = FnStrategy::new(|a: &u32, b: &u32| a.cmp(b), |_: &u32| 0u64);
        run(ProbingSet::with_strategy(cap, strategy), &pool, ops)?;
    }

    // Identity hash: origins are `v % cap`, giving short overlapping chains.
    #[test]
    fn prop_state_machine_identity_hash((cap, pool, ops) in arb_scenario()) {
        let strategy = FnStrategy::new(|a: &u32, b: &u32| a.cmp(b), |v: &u32| *v as u64);
        run(ProbingSet::with_strategy(cap, strategy), &pool, ops)?;
    }

    // Reverse comparator: snapshot order follows the strategy, not `Ord`.
    #[test]
    fn prop_snapshot_follows_strategy(values in proptest::collection::vec(any::<i64>(), 0..40)) {
        let mut set = ProbingSet::from_fns(
            64,
            |a: &i64, b: &i64| b.cmp(a),
            |v: &i64| *v as u64,
        );
        for v in &values {
            set.insert(*v);
        }
        let snap = set.to_sorted_vec().unwrap();
        prop_assert!(snap.windows(2).all(|w| w[0].cmp(&w[1]) == Ordering::Greater));
        let distinct: BTreeSet<i64> = values.iter().copied().collect();
        prop_assert_eq!(snap.len(), distinct.len());
        prop_assert_eq!(set.len(), distinct.len());
    }
}
