//! Deterministic pseudorandom number generation
//!
//! Scrambles must be reproducible from a seed, not statistically strong,
//! so a plain linear congruential generator is used.

use std::time::{SystemTime, UNIX_EPOCH};

/// Has the ability to generate reproducible pseudorandom sequences
pub trait RandomNumberGenerator: Send {
    /// Use a new initial seed and rewind to it.
    fn use_seed(&mut self, seed: u64);

    /// Rewind to the start of the sequence for the current initial seed.
    fn reset(&mut self);

    /// Produce the next number of the sequence, in `[0, 1)`.
    fn next(&mut self) -> f64;
}

/// A linear congruential generator.
///
/// `seed' = (seed * multiplier + increment) mod modulus`, and each draw is
/// `seed' / modulus`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearCongruentialGenerator {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    initial_seed: u64,
    current_seed: u64,
}

impl LinearCongruentialGenerator {
    pub const DEFAULT_MODULUS: u64 = (1 << 16) + 1;
    pub const DEFAULT_MULTIPLIER: u64 = 1_103_515_245;
    pub const DEFAULT_INCREMENT: u64 = 12_345;

    /// Create a generator with the default parameters.
    pub fn new(seed: u64) -> Self {
        Self::with_parameters(
            seed,
            Self::DEFAULT_MODULUS,
            Self::DEFAULT_MULTIPLIER,
            Self::DEFAULT_INCREMENT,
        )
    }

    /// Create a generator with custom recurrence parameters.
    ///
    /// A zero modulus is bumped to one so draws stay finite.
    pub fn with_parameters(seed: u64, modulus: u64, multiplier: u64, increment: u64) -> Self {
        Self {
            modulus: modulus.max(1),
            multiplier,
            increment,
            initial_seed: seed,
            current_seed: seed,
        }
    }

    /// Create a generator seeded from the wall clock (milliseconds).
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Initial seed of the current sequence
    pub fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    /// Seed the next draw will be derived from
    pub fn current_seed(&self) -> u64 {
        self.current_seed
    }
}

impl Default for LinearCongruentialGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RandomNumberGenerator for LinearCongruentialGenerator {
    fn use_seed(&mut self, seed: u64) {
        self.initial_seed = seed;
        self.reset();
    }

    fn reset(&mut self) {
        self.current_seed = self.initial_seed;
    }

    /// The recurrence is computed exactly. Floating-point implementations
    /// lose precision once `seed * multiplier` exceeds 2^53, so scrambles
    /// from large seeds such as wall-clock milliseconds are not
    /// bit-identical to theirs. Seeds below about 8e6 agree.
    fn next(&mut self) -> f64 {
        let next = (u128::from(self.current_seed) * u128::from(self.multiplier)
            + u128::from(self.increment))
            % u128::from(self.modulus);
        // `next < modulus`, which itself fits in u64.
        self.current_seed = next as u64;

        self.current_seed as f64 / self.modulus as f64
    }
}

/// Current wall-clock time in milliseconds, used as the default seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut LinearCongruentialGenerator, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.next()).collect()
    }

    #[test]
    fn test_first_draw() {
        let mut rng = LinearCongruentialGenerator::new(1);
        // (1 * 1103515245 + 12345) mod 65537
        let expected_seed = (1_103_515_245u64 + 12_345) % 65_537;
        let value = rng.next();

        assert_eq!(rng.current_seed(), expected_seed);
        assert_eq!(value, expected_seed as f64 / 65_537.0);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = LinearCongruentialGenerator::new(31_337);
        for value in draws(&mut rng, 1_000) {
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LinearCongruentialGenerator::new(2024);
        let mut b = LinearCongruentialGenerator::new(7);
        b.use_seed(2024);

        assert_eq!(draws(&mut a, 64), draws(&mut b, 64));
    }

    #[test]
    fn test_reset_rewinds() {
        let mut rng = LinearCongruentialGenerator::new(77);
        let first = draws(&mut rng, 10);
        rng.reset();
        assert_eq!(draws(&mut rng, 10), first);
        assert_eq!(rng.initial_seed(), 77);
    }

    #[test]
    fn test_use_seed_rewinds_mid_sequence() {
        let mut rng = LinearCongruentialGenerator::new(3);
        draws(&mut rng, 5);
        rng.use_seed(3);
        assert_eq!(rng.current_seed(), 3);
    }

    #[test]
    fn test_large_seed_does_not_overflow() {
        let mut rng = LinearCongruentialGenerator::new(u64::MAX);
        let value = rng.next();
        assert!((0.0..1.0).contains(&value));
    }

    #[test]
    fn test_clock_sized_seed_is_exact() {
        let mut rng = LinearCongruentialGenerator::new(1_700_000_000_000);
        rng.next();
        // Rounding through f64 would give 49243.
        assert_eq!(rng.current_seed(), 14_482);
    }

    #[test]
    fn test_zero_modulus_is_clamped() {
        let mut rng = LinearCongruentialGenerator::with_parameters(5, 0, 3, 1);
        assert_eq!(rng.next(), 0.0);
    }
}
