//! Property tests for the instrumented sorting algorithms
//!
//! These tests verify that, for every registered variant:
//! - The output is sorted by value and is a permutation of the input
//! - The final change snapshot equals the sorted output
//! - Every change snapshot is a permutation of the input
//! - Replaying the change snapshots ends in the same arrangement the
//!   in-place sort leaves behind, equal items included
//! - Capturing the same input twice yields the same operations
//!
//! and that merge sort is stable and already sorted input is handled
//! without disturbing it.

use proptest::prelude::*;
use sortvis_algorithms::{AlgorithmRegistry, SortingAlgorithm};
use sortvis_core::{Operation, OperationFeed, SortableItem};
use sortvis_recorder::capture;

mod generators {
    use super::*;

    /// Item values with plenty of duplicates
    pub fn arb_values() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(1u32..8, 0..48)
    }

    /// Distinct values in ascending order
    pub fn arb_sorted_distinct() -> impl Strategy<Value = Vec<u32>> {
        (0usize..48).prop_map(|len| (1..=len as u32).collect())
    }
}

fn items(values: &[u32]) -> Vec<SortableItem> {
    values.iter().copied().map(SortableItem::new).collect()
}

fn ids(items: &[SortableItem]) -> Vec<u64> {
    let mut ids: Vec<u64> = items.iter().map(|item| item.id.as_u64()).collect();
    ids.sort_unstable();
    ids
}

fn sort(algorithm: &dyn SortingAlgorithm, input: &[SortableItem]) -> Vec<SortableItem> {
    let log = capture(algorithm, input);
    log.final_state().to_vec()
}

fn snapshots(operations: &[Operation]) -> impl Iterator<Item = &[SortableItem]> {
    operations.iter().filter_map(|operation| match operation {
        Operation::Change { sequence } => Some(sequence.as_slice()),
        Operation::Comparison { .. } => None,
    })
}

proptest! {
    #[test]
    fn prop_output_is_sorted_permutation(values in generators::arb_values()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);

        for (identifier, algorithm) in registry.iter() {
            let log = capture(algorithm.as_ref(), &input);
            let output = log.final_state();

            prop_assert!(
                output.windows(2).all(|pair| pair[0].value <= pair[1].value),
                "{} left {:?} unsorted", identifier, output
            );
            prop_assert_eq!(ids(output), ids(&input), "{}", identifier);

            for snapshot in snapshots(log.operations()) {
                prop_assert_eq!(snapshot.len(), input.len(), "{}", identifier);
                prop_assert_eq!(ids(snapshot), ids(&input), "{}", identifier);
            }
        }
    }

    #[test]
    fn prop_replay_matches_in_place_sort(values in generators::arb_values()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);

        for (identifier, algorithm) in registry.iter() {
            let mut working = input.clone();
            let mut replayed = input.clone();
            {
                let mut feed = OperationFeed::new();
                feed.attach(|operation| {
                    if let Operation::Change { sequence } = operation {
                        replayed.clone_from(sequence);
                    }
                });
                algorithm.sort(&mut working, &mut feed);
            }

            prop_assert_eq!(&replayed, &working, "{}", identifier);

            let log = capture(algorithm.as_ref(), &input);
            prop_assert_eq!(log.final_state(), working.as_slice(), "{}", identifier);
        }
    }

    #[test]
    fn prop_capture_is_deterministic(values in generators::arb_values()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);

        for (identifier, algorithm) in registry.iter() {
            let first = capture(algorithm.as_ref(), &input);
            let second = capture(algorithm.as_ref(), &input);
            prop_assert_eq!(first.operations(), second.operations(), "{}", identifier);
        }
    }

    #[test]
    fn prop_comparisons_reference_input_items(values in generators::arb_values()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);
        let known = ids(&input);

        for (identifier, algorithm) in registry.iter() {
            let log = capture(algorithm.as_ref(), &input);
            for operation in log.iter() {
                if let Operation::Comparison { a, b } = operation {
                    prop_assert!(known.binary_search(&a.id.as_u64()).is_ok(), "{}", identifier);
                    prop_assert!(known.binary_search(&b.id.as_u64()).is_ok(), "{}", identifier);
                }
            }
        }
    }

    #[test]
    fn prop_merge_is_stable(values in generators::arb_values()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);

        for identifier in ["merge-top-down", "merge-bottom-up"] {
            let algorithm = registry.use_algorithm(identifier).unwrap();
            let output = sort(algorithm.as_ref(), &input);

            // Ids grow with creation order, so equal values keep ascending ids.
            for pair in output.windows(2) {
                if pair[0].value == pair[1].value {
                    prop_assert!(pair[0].id.as_u64() < pair[1].id.as_u64(), "{}", identifier);
                }
            }
        }
    }

    #[test]
    fn prop_sorted_input_is_left_in_place(values in generators::arb_sorted_distinct()) {
        let registry = AlgorithmRegistry::with_defaults();
        let input = items(&values);

        for identifier in ["insertion", "shell"] {
            let log = capture(registry.use_algorithm(identifier).unwrap().as_ref(), &input);
            prop_assert_eq!(log.stats().changes, 0, "{}", identifier);
        }

        for identifier in [
            "selection",
            "merge-top-down",
            "merge-bottom-up",
            "quick-two-way-partitioning",
        ] {
            let log = capture(registry.use_algorithm(identifier).unwrap().as_ref(), &input);
            for snapshot in snapshots(log.operations()) {
                prop_assert_eq!(snapshot, input.as_slice(), "{}", identifier);
            }
        }

        let algorithm = registry.use_algorithm("quick-three-way-partitioning").unwrap();
        prop_assert_eq!(sort(algorithm.as_ref(), &input), input);
    }
}
