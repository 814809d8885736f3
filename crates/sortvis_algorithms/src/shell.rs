//! Shellsort

use crate::algorithm::{swap_and_emit, SortingAlgorithm};
use sortvis_core::{OperationFeed, SortableItem};

/// Insertion sort over the gap sequence `1, 4, 13, 40, ...`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellSort;

impl ShellSort {
    pub fn new() -> Self {
        Self
    }

    /// Largest gap used for a sequence of `len` items
    pub fn initial_gap(len: usize) -> usize {
        let mut h = 1;
        while h < len / 3 {
            h = h * 3 + 1;
        }
        h
    }
}

impl SortingAlgorithm for ShellSort {
    fn name(&self) -> &str {
        "Shellsort"
    }

    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>) {
        let mut h = Self::initial_gap(items.len());

        while h >= 1 {
            for i in h..items.len() {
                let mut j = i;
                while j >= h && items[j].value < items[j - h].value {
                    feed.comparison(&items[j], &items[j - h]);
                    swap_and_emit(items, j, j - h, feed);
                    j -= h;
                }
            }

            h /= 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_support::{items, run, values};
    use sortvis_core::Operation;

    #[test]
    fn test_gap_sequence() {
        assert_eq!(ShellSort::initial_gap(0), 1);
        assert_eq!(ShellSort::initial_gap(5), 1);
        assert_eq!(ShellSort::initial_gap(9), 4);
        assert_eq!(ShellSort::initial_gap(11), 4);
        assert_eq!(ShellSort::initial_gap(12), 4);
        assert_eq!(ShellSort::initial_gap(100), 40);
    }

    #[test]
    fn test_sorts() {
        let input = items(&[9, 3, 7, 1, 8, 2, 6, 4, 5, 12, 10, 11, 0]);
        let (sorted, operations) = run(&ShellSort, &input);
        assert_eq!(values(&sorted), (0..=12).collect::<Vec<u32>>());
        assert!(matches!(operations.first(), Some(Operation::Comparison { .. })));
    }

    #[test]
    fn test_gap_comparison_pairs() {
        // With 12 items the first pass uses gap 4.
        let input = items(&[1, 2, 3, 4, 0, 5, 6, 7, 8, 9, 10, 11]);
        let (_, operations) = run(&ShellSort, &input);

        assert_eq!(
            operations[0],
            Operation::Comparison {
                a: input[4],
                b: input[0]
            }
        );
    }
}
