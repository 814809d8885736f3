//! Insertion sort

use crate::algorithm::{swap_and_emit, SortingAlgorithm};
use sortvis_core::{OperationFeed, SortableItem};

/// Shifts each item left while it is smaller than its left neighbor.
///
/// Only comparisons that lead to a shift are reported, one change per shift.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl InsertionSort {
    pub fn new() -> Self {
        Self
    }
}

impl SortingAlgorithm for InsertionSort {
    fn name(&self) -> &str {
        "Insertion sort"
    }

    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>) {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && items[j].value < items[j - 1].value {
                feed.comparison(&items[j], &items[j - 1]);
                swap_and_emit(items, j, j - 1, feed);
                j -= 1;
            }
        }
    }
}
