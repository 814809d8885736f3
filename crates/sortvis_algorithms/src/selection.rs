//! Selection sort

use crate::algorithm::{swap_and_emit, SortingAlgorithm};
use sortvis_core::{OperationFeed, SortableItem};

/// Scans the remainder for its minimum and swaps it into place.
///
/// Every scan step is reported as a comparison. Each outer position emits
/// exactly one change, even when the minimum is already in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl SelectionSort {
    pub fn new() -> Self {
        Self
    }
}

impl SortingAlgorithm for SelectionSort {
    fn name(&self) -> &str {
        "Selection sort"
    }

    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>) {
        for i in 0..items.len() {
            let mut min = i;

            for j in i + 1..items.len() {
                feed.comparison(&items[j], &items[min]);

                if items[j].value < items[min].value {
                    min = j;
                }
            }

            swap_and_emit(items, i, min, feed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_support::{changes, comparisons, items, run, values};

    #[test]
    fn test_empty_sequence() {
        let (sorted, operations) = run(&SelectionSort, &[]);
        assert!(sorted.is_empty());
        assert!(operations.is_empty());
    }

    #[test]
    fn test_counts() {
        let (sorted, operations) = run(&SelectionSort, &items(&[5, 2, 4, 1, 3]));
        assert_eq!(values(&sorted), vec![1, 2, 3, 4, 5]);
        assert_eq!(changes(&operations), 5);
        assert_eq!(comparisons(&operations), 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_sorted_input_swaps_with_self() {
        let input = items(&[1, 2, 3]);
        let (_, operations) = run(&SelectionSort, &input);

        assert_eq!(changes(&operations), 3);
        for operation in &operations {
            if let sortvis_core::Operation::Change { sequence } = operation {
                assert_eq!(sequence, &input);
            }
        }
    }
}
