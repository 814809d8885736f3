//! Sorting algorithm contract

use sortvis_core::{OperationFeed, SortableItem};

/// An algorithm that sorts items in place by ascending value.
///
/// Implementations report a comparison to the feed right before acting
/// on its result, and a full snapshot right after every mutation. They
/// hold no state between runs beyond their configured strategy, so one
/// instance can be shared and reused freely.
pub trait SortingAlgorithm: Send + Sync {
    /// Human readable name of the algorithm
    fn name(&self) -> &str;

    /// Sort `items` in place, emitting operations into `feed`.
    fn sort(&self, items: &mut [SortableItem], feed: &mut OperationFeed<'_>);
}

/// Swap two positions and emit the resulting snapshot
#[inline]
pub(crate) fn swap_and_emit(
    items: &mut [SortableItem],
    a: usize,
    b: usize,
    feed: &mut OperationFeed<'_>,
) {
    items.swap(a, b);
    feed.change(items);
}

#[cfg(test)]
pub(crate) mod test_support {
    use sortvis_core::{Operation, OperationFeed, SortableItem};

    use super::SortingAlgorithm;

    pub fn items(values: &[u32]) -> Vec<SortableItem> {
        values.iter().copied().map(SortableItem::new).collect()
    }

    pub fn values(items: &[SortableItem]) -> Vec<u32> {
        items.iter().map(|item| item.value).collect()
    }

    /// Sort a copy of `input`, returning the sorted items and the operations
    pub fn run(
        algorithm: &dyn SortingAlgorithm,
        input: &[SortableItem],
    ) -> (Vec<SortableItem>, Vec<Operation>) {
        let mut working = input.to_vec();
        let mut operations = Vec::new();
        {
            let mut feed = OperationFeed::new();
            feed.attach(|operation| operations.push(operation.clone()));
            algorithm.sort(&mut working, &mut feed);
        }
        (working, operations)
    }

    pub fn changes(operations: &[Operation]) -> usize {
        operations.iter().filter(|op| op.is_change()).count()
    }

    pub fn comparisons(operations: &[Operation]) -> usize {
        operations.iter().filter(|op| op.is_comparison()).count()
    }
}
