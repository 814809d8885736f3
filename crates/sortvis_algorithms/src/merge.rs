//! Mergesort

use crate::algorithm::SortingAlgorithm;
use sortvis_core::{OperationFeed, SortableItem};

/// Desired merging strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Recursively split at the midpoint, then merge the halves
    #[default]
    TopDown,
    /// Merge runs of doubling length, left to right
    BottomUp,
}

/// A stable mergesort.
///
/// The merge step takes from the right half only when it is strictly
/// smaller, which keeps equal items in their original order. A comparison
/// is reported for every take decided by comparing, and one change is
/// emitted per merge covering the whole merged range.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort {
    strategy: MergeStrategy,
}

impl MergeSort {
    pub fn new(strategy: MergeStrategy) -> Self {
        Self { strategy }
    }

    pub fn top_down() -> Self {
        Self::new(MergeStrategy::TopDown)
    }

    pub fn bottom_up() -> Self {
        Self::new(MergeStrategy::BottomUp)
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    fn sort_top_down(
        items: &mut [SortableItem],
        buffer: &mut [SortableItem],
        low: usize,
        high: usize,
        feed: &mut OperationFeed<'_>,
    ) {
        if high <= low {
            return;
        }

        let mid = low + (high - low) / 2;

        Self::sort_top_down(items, buffer, low, mid, feed);
        Self::sort_top_down(items, buffer, mid + 1, high, feed);
        Self::merge(items, buffer, low, mid, high, feed);
    }

    fn sort_bottom_up(
        items: &mut [SortableItem],
        buffer: &mut [SortableItem],
        feed: &mut OperationFeed<'_>,
    ) {
        let len = items.len();
        let mut width = 1;

        while width < len {
            let mut low = 0;
            while low < len - width {
                let mid = low + width - 1;
                let high = (low + width + width - 1).min(len - 1);
                Self::merge(items, buffer, low, mid, high, feed);
                low += width + width;
            }
            width *= 2;
        }
    }

    /// Merge the sorted ranges `[low, mid]` and `[mid + 1, high]`
    fn merge(
        items: &mut [SortableItem],
        buffer: &mut [SortableItem],
        low: usize,
        mid: usize,
        high: usize,
        feed: &mut OperationFeed<'_>,
    ) {
        buffer[low..=high].copy_from_slice(&items[low..=high]);

        let mut i = low;
        let mut j = mid + 1;

        for k in low..=high {
            if i > mid {
                items[k] = buffer[j];
                j += 1;
            } else if j > high {
                items[k] = buffer[i];
                i += 1;
            } else if buffer[j].value < buffer[i].value {
                feed.comparison(&buffer[j], &buffer[i]);
                items[k] = buffer[j];
                j += 1;
            } else {
                items[k] = buffer[i];
                i += 1;
            }
        }

        feed.change(items);
    }
}

impl SortingAlgorithm for MergeSort {
    fn name(&self) -> &str {
        match self.strategy {
            MergeStrategy::TopDown => "Mergesort (top-down)",
            MergeStrategy::BottomUp => "Mergesort (bottom-up)",
        }
    }

    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>) {
        if items.len() < 2 {
            return;
        }

        let mut buffer = items.to_vec();

        match self.strategy {
            MergeStrategy::TopDown => {
                let high = items.len() - 1;
                Self::sort_top_down(items, &mut buffer, 0, high, feed);
            }
            MergeStrategy::BottomUp => Self::sort_bottom_up(items, &mut buffer, feed),
        }
    }
}
