//! Sortvis Algorithms
//!
//! Classic sorting algorithms instrumented to report every comparison and
//! mutation through an [`OperationFeed`](sortvis_core::OperationFeed).
//!
//! # Variants
//!
//! - **Insertion**: shift each item left while it is smaller than its neighbor
//! - **Selection**: swap the minimum of the remainder into place
//! - **Shell**: insertion sort over a shrinking `3h + 1` gap sequence
//! - **Merge**: top-down recursive or bottom-up iterative merging
//! - **Quick**: two-way (Hoare) or three-way (Dutch flag) partitioning
//!
//! All variants are deterministic: the same input always produces the
//! same sequence of operations.

pub mod algorithm;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod registry;
pub mod selection;
pub mod shell;

pub use algorithm::SortingAlgorithm;
pub use insertion::InsertionSort;
pub use merge::{MergeSort, MergeStrategy};
pub use quick::{PartitionStrategy, QuickSort};
pub use registry::AlgorithmRegistry;
pub use selection::SelectionSort;
pub use shell::ShellSort;
