//! Sortvis Core
//!
//! This crate provides the shared vocabulary for instrumented sorting:
//!
//! - **Sortable Items**: identity-stable values that algorithms reorder
//! - **Operations**: comparison and change records emitted while sorting
//! - **Operation Feed**: listener registry algorithms emit operations into
//! - **Random Number Generation**: a reproducible LCG used to scramble items
//!
//! # Example
//!
//! ```rust
//! use sortvis_core::{generate_items, LinearCongruentialGenerator};
//!
//! let mut rng = LinearCongruentialGenerator::new(42);
//! let first = generate_items(8, &mut rng);
//! let second = generate_items(8, &mut rng);
//!
//! // Generation rewinds the generator, so the scramble is reproducible.
//! let values = |items: &[sortvis_core::SortableItem]| {
//!     items.iter().map(|item| item.value).collect::<Vec<_>>()
//! };
//! assert_eq!(values(&first), values(&second));
//! ```

pub mod error;
pub mod events;
pub mod item;
pub mod operation;
pub mod rng;

pub use error::{CoreError, Result};
pub use events::{ListenerId, OperationFeed, OperationHandler};
pub use item::{generate_items, ItemId, SortableItem};
pub use operation::{LogStats, Operation, OperationLog};
pub use rng::{clock_seed, LinearCongruentialGenerator, RandomNumberGenerator};
