//! Sortable items
//!
//! Items carry a process-unique identity and an immutable value. Sorting
//! algorithms only ever reorder them, so identity survives every move and
//! renderers can track an item from one snapshot to the next.

use crate::rng::RandomNumberGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique item identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh identifier
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identifier value
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value flowing through the sorting algorithms and the operation log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortableItem {
    pub id: ItemId,
    pub value: u32,
}

impl SortableItem {
    /// Create an item with a freshly allocated identifier
    pub fn new(value: u32) -> Self {
        Self {
            id: ItemId::next(),
            value,
        }
    }

    /// Create an item with a known identifier
    pub fn with_id(id: ItemId, value: u32) -> Self {
        Self { id, value }
    }
}

impl fmt::Display for SortableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.value)
    }
}

/// Generate `count` items with values `1..=count`, scrambled by `rng`.
///
/// The generator is rewound before shuffling, so the same seed and count
/// always produce the same value order. The shuffle draws its swap index
/// from the full range `[0, count)` at every step. This is the classic,
/// slightly biased Fisher-Yates form; it is kept as is so existing seeds
/// keep producing the same scrambles.
pub fn generate_items<R>(count: usize, rng: &mut R) -> Vec<SortableItem>
where
    R: RandomNumberGenerator + ?Sized,
{
    rng.reset();

    let mut items: Vec<SortableItem> = (1..=count)
        .map(|value| SortableItem::new(value as u32))
        .collect();

    for i in 0..count {
        let j = ((rng.next() * count as f64).floor() as usize).min(count - 1);
        items.swap(i, j);
    }

    tracing::trace!(count, "generated scrambled items");

    items
}
