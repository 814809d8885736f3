//! Quicksort

use crate::algorithm::{swap_and_emit, SortingAlgorithm};
use sortvis_core::{OperationFeed, SortableItem};

/// Desired partitioning strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartitionStrategy {
    /// Hoare-style partitioning around the first item
    #[default]
    TwoWay,
    /// Dutch national flag partitioning around the first item
    ThreeWay,
}

/// Quicksort using the first item of each range as pivot.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort {
    strategy: PartitionStrategy,
}

impl QuickSort {
    pub fn new(strategy: PartitionStrategy) -> Self {
        Self { strategy }
    }

    pub fn two_way() -> Self {
        Self::new(PartitionStrategy::TwoWay)
    }

    pub fn three_way() -> Self {
        Self::new(PartitionStrategy::ThreeWay)
    }

    pub fn strategy(&self) -> PartitionStrategy {
        self.strategy
    }

    fn sort_two_way(
        items: &mut [SortableItem],
        low: usize,
        high: usize,
        feed: &mut OperationFeed<'_>,
    ) {
        if high <= low {
            return;
        }

        let j = Self::partition(items, low, high, feed);

        if j > low {
            Self::sort_two_way(items, low, j - 1, feed);
        }
        Self::sort_two_way(items, j + 1, high, feed);

        // Settled subrange
        feed.change(items);
    }

    /// Partition `[low, high]` around `items[low]`, returning the pivot's
    /// final position.
    ///
    /// A comparison is reported each time a scan pointer moves past an item.
    fn partition(
        items: &mut [SortableItem],
        low: usize,
        high: usize,
        feed: &mut OperationFeed<'_>,
    ) -> usize {
        let pivot = items[low];
        let mut i = low;
        let mut j = high + 1;

        loop {
            loop {
                i += 1;
                if items[i].value >= pivot.value {
                    break;
                }
                feed.comparison(&items[i], &pivot);
                if i == high {
                    break;
                }
            }

            loop {
                j -= 1;
                if pivot.value >= items[j].value {
                    break;
                }
                feed.comparison(&pivot, &items[j]);
                if j == low {
                    break;
                }
            }

            if i >= j {
                break;
            }

            swap_and_emit(items, i, j, feed);
        }

        swap_and_emit(items, low, j, feed);

        j
    }

    fn sort_three_way(
        items: &mut [SortableItem],
        low: usize,
        high: usize,
        feed: &mut OperationFeed<'_>,
    ) {
        if high <= low {
            return;
        }

        let pivot = items[low];
        let mut less_than = low;
        let mut greater_than = high;
        let mut i = low + 1;

        while i <= greater_than {
            feed.comparison(&items[i], &pivot);

            if items[i].value < pivot.value {
                swap_and_emit(items, less_than, i, feed);
                less_than += 1;
                i += 1;
            } else if items[i].value > pivot.value {
                swap_and_emit(items, i, greater_than, feed);
                greater_than -= 1;
            } else {
                i += 1;
            }
        }

        if less_than > low {
            Self::sort_three_way(items, low, less_than - 1, feed);
        }
        Self::sort_three_way(items, greater_than + 1, high, feed);
    }
}

impl SortingAlgorithm for QuickSort {
    fn name(&self) -> &str {
        match self.strategy {
            PartitionStrategy::TwoWay => "Quicksort (two-way partitioning)",
            PartitionStrategy::ThreeWay => "Quicksort (three-way partitioning)",
        }
    }

    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>) {
        if items.len() < 2 {
            return;
        }

        let high = items.len() - 1;
        match self.strategy {
            PartitionStrategy::TwoWay => Self::sort_two_way(items, 0, high, feed),
            PartitionStrategy::ThreeWay => Self::sort_three_way(items, 0, high, feed),
        }
    }
}
