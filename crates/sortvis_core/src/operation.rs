//! Recorded sorting operations
//!
//! An [`OperationLog`] is the ordered record of everything one algorithm
//! run did to one input snapshot. It is built once and never mutated;
//! capturing again produces a new log.

use crate::item::SortableItem;
use serde::{Deserialize, Serialize};

/// A single recorded step of a sorting algorithm
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    /// Two items were compared. The outcome is not recorded.
    Comparison { a: SortableItem, b: SortableItem },
    /// Full snapshot of the working sequence right after a mutation.
    Change { sequence: Vec<SortableItem> },
}

impl Operation {
    pub fn is_comparison(&self) -> bool {
        matches!(self, Operation::Comparison { .. })
    }

    pub fn is_change(&self) -> bool {
        matches!(self, Operation::Change { .. })
    }
}

/// Operation counts of a captured log
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    pub comparisons: usize,
    pub changes: usize,
}

/// Ordered, immutable record of one capture run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLog {
    initial: Vec<SortableItem>,
    operations: Vec<Operation>,
}

impl OperationLog {
    /// Create a log from the input snapshot and the operations recorded for it.
    pub fn new(initial: Vec<SortableItem>, operations: Vec<Operation>) -> Self {
        Self {
            initial,
            operations,
        }
    }

    /// The input snapshot the algorithm started from
    pub fn initial(&self) -> &[SortableItem] {
        &self.initial
    }

    /// All operations in capture order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Get the operation at a position
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// State after replaying every change, or the initial snapshot if
    /// nothing changed.
    pub fn final_state(&self) -> &[SortableItem] {
        self.operations
            .iter()
            .rev()
            .find_map(|operation| match operation {
                Operation::Change { sequence } => Some(sequence.as_slice()),
                Operation::Comparison { .. } => None,
            })
            .unwrap_or(&self.initial)
    }

    /// Count comparisons and changes
    pub fn stats(&self) -> LogStats {
        self.operations
            .iter()
            .fold(LogStats::default(), |mut stats, operation| {
                match operation {
                    Operation::Comparison { .. } => stats.comparisons += 1,
                    Operation::Change { .. } => stats.changes += 1,
                }
                stats
            })
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
