//! Rendering boundary
//!
//! The scheduler decides what is shown and when; a renderer decides how.
//! Only [`Renderer::render`] is required, the remaining hooks default to
//! no-ops for media that cannot animate.

use super::pacing::Transition;
use sortvis_core::SortableItem;
use std::time::Duration;

/// Receives playback output from the scheduler
pub trait Renderer: Send + 'static {
    /// Show `state` as the current arrangement of items.
    fn render(&mut self, state: &[SortableItem]);

    /// Items are about to move from `transition.from` to `transition.to`.
    ///
    /// The scheduler waits [`Transition::total`] and then calls
    /// [`Renderer::render`] with the target state.
    fn begin_transition(&mut self, transition: &Transition) {
        let _ = transition;
    }

    /// Mark two items as being compared, fading in over `fill`.
    fn highlight_comparison(&mut self, a: &SortableItem, b: &SortableItem, fill: Duration) {
        let _ = (a, b, fill);
    }

    /// Remove the comparison highlight.
    fn clear_comparison(&mut self) {}
}

/// A renderer that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &[SortableItem]) {}
}
