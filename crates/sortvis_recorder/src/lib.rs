//! Sortvis Recorder
//!
//! Captures the operations a sorting algorithm performs and plays them
//! back at a configurable pace.
//!
//! Capture is synchronous and total: the algorithm runs to completion on
//! a private copy of the items before [`capture`] returns. Playback is the
//! asynchronous half, driven by the [`replay::PlaybackScheduler`].
//!
//! # Example
//!
//! ```rust
//! use sortvis_algorithms::InsertionSort;
//! use sortvis_core::SortableItem;
//! use sortvis_recorder::capture;
//!
//! let items: Vec<SortableItem> = [3, 1, 2].into_iter().map(SortableItem::new).collect();
//! let log = capture(&InsertionSort, &items);
//!
//! assert_eq!(log.stats().changes, 2);
//! assert_eq!(log.initial(), items.as_slice());
//! ```

mod capture;
pub mod replay;

pub use capture::{capture, capture_json};
pub use replay::{
    CancellationToken, LifecycleEvent, PlaybackConfig, PlaybackScheduler, PlaybackState,
    Renderer, Transition, WaitOutcome,
};
