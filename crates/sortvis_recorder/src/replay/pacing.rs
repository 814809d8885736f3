//! Pacing of changes and comparisons
//!
//! Timing is derived from a single step duration. A change that moves
//! many items gets a longer movement phase, capped at four steps.

use rustc_hash::FxHashMap;
use sortvis_core::{ItemId, SortableItem};
use std::time::Duration;

/// Upper bound of any color fill transition
pub const MAX_FILL_DURATION: Duration = Duration::from_millis(250);

/// Fill transition used to highlight or settle items
pub fn fill_duration(step: Duration) -> Duration {
    (step / 4).min(MAX_FILL_DURATION)
}

/// Movement of items between two rendered states
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// State currently on screen
    pub from: Vec<SortableItem>,
    /// State to move to
    pub to: Vec<SortableItem>,
    /// Slot displacement of each item of `from`, by position in `from`
    pub offsets: Vec<isize>,
    /// Number of items moving towards higher slots
    pub moved: usize,
    /// Movement duration in steps, within `[1, 4]`
    pub multiplier: f64,
    /// Color fill transition duration
    pub fill: Duration,
    /// Delay before items start moving, and settle time after they stop
    pub delay: Duration,
    /// Duration of the movement itself
    pub movement: Duration,
}

impl Transition {
    /// Compute the transition from `from` to `to` for a given step duration.
    pub fn between(from: &[SortableItem], to: &[SortableItem], step: Duration) -> Self {
        let positions: FxHashMap<ItemId, usize> = to
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id, index))
            .collect();

        let offsets: Vec<isize> = from
            .iter()
            .enumerate()
            .map(|(index, item)| {
                positions
                    .get(&item.id)
                    .map_or(0, |&target| target as isize - index as isize)
            })
            .collect();

        let moved = offsets.iter().filter(|&&offset| offset > 0).count();
        let multiplier = (moved as f64 * 0.25).clamp(1.0, 4.0);

        Self {
            from: from.to_vec(),
            to: to.to_vec(),
            offsets,
            moved,
            multiplier,
            fill: fill_duration(step),
            delay: step / 2,
            movement: step.mul_f64(multiplier),
        }
    }

    /// True if no item changes slot
    pub fn is_still(&self) -> bool {
        self.moved == 0
    }

    /// How long playback waits for this transition before rendering `to`
    pub fn total(&self) -> Duration {
        if self.is_still() {
            return Duration::ZERO;
        }
        self.delay + self.movement + self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[u32]) -> Vec<SortableItem> {
        values.iter().copied().map(SortableItem::new).collect()
    }

    #[test]
    fn test_fill_is_capped() {
        assert_eq!(
            fill_duration(Duration::from_millis(100)),
            Duration::from_millis(25)
        );
        assert_eq!(fill_duration(Duration::from_secs(10)), MAX_FILL_DURATION);
    }

    #[test]
    fn test_identical_states_are_still() {
        let state = items(&[1, 2, 3]);
        let transition = Transition::between(&state, &state, Duration::from_millis(100));

        assert!(transition.is_still());
        assert_eq!(transition.offsets, vec![0, 0, 0]);
        assert_eq!(transition.total(), Duration::ZERO);
    }

    #[test]
    fn test_single_swap() {
        let from = items(&[1, 2, 3]);
        let to = vec![from[2], from[1], from[0]];
        let transition = Transition::between(&from, &to, Duration::from_millis(100));

        assert_eq!(transition.offsets, vec![2, 0, -2]);
        assert_eq!(transition.moved, 1);
        assert_eq!(transition.multiplier, 1.0);
        assert_eq!(transition.delay, Duration::from_millis(50));
        assert_eq!(transition.movement, Duration::from_millis(100));
        assert_eq!(transition.total(), Duration::from_millis(200));
    }

    #[test]
    fn test_multiplier_grows_and_caps() {
        let step = Duration::from_millis(100);

        // Rotate 12 items right by one: 11 move up.
        let from = items(&(1..=12).collect::<Vec<u32>>());
        let mut to = from.clone();
        to.rotate_right(1);
        let transition = Transition::between(&from, &to, step);
        assert_eq!(transition.moved, 11);
        assert_eq!(transition.multiplier, 2.75);

        let from = items(&(1..=40).collect::<Vec<u32>>());
        let mut to = from.clone();
        to.rotate_right(1);
        let transition = Transition::between(&from, &to, step);
        assert_eq!(transition.multiplier, 4.0);
        assert_eq!(transition.total(), Duration::from_millis(500));
    }
}
