//! Playback engine for captured operation logs.
//!
//! This module provides:
//! - `CancellationToken` - Cooperative cancellation shared with timed waits
//! - `Transition` - Pacing of a change, derived from the step timing
//! - `Renderer` - The boundary a visual medium plugs into
//! - `PlaybackScheduler` - Replays a log one operation at a time
//!
//! # Example
//!
//! ```ignore
//! use sortvis_recorder::replay::{PlaybackConfig, PlaybackScheduler};
//!
//! let scheduler = PlaybackScheduler::new(
//!     PlaybackConfig::default().with_seed(42),
//!     registry.use_algorithm("insertion")?,
//!     renderer,
//! );
//!
//! scheduler.start();
//! // ...
//! scheduler.stop();
//! scheduler.settled().await;
//! ```

mod cancel;
mod pacing;
mod renderer;
mod scheduler;

pub use cancel::{wait, CancellationToken, WaitOutcome};
pub use pacing::{Transition, MAX_FILL_DURATION};
pub use renderer::{NullRenderer, Renderer};
pub use scheduler::{LifecycleEvent, PlaybackConfig, PlaybackScheduler, PlaybackState};
