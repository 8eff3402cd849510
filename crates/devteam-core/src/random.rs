//! Pluggable random source for the simulation.
//!
//! Workers and the task distributor never call `rand` directly; they draw from
//! a [`SharedRandom`] so tests can replay a fixed sequence.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::RngExt;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource: Send {
    /// Next uniform sample in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform value in `[low, high)`
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Uniform integer in `[low, high]`
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let span = (high - low + 1) as f64;
        low + ((self.next_f64() * span) as u32).min(high - low)
    }

    /// Uniform index into a collection of `len` items (`len` must be > 0)
    fn pick_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Random source shared between the coordinator, distributor and workers
pub type SharedRandom = Arc<Mutex<Box<dyn RandomSource>>>;

/// Wrap a random source for sharing
pub fn shared(source: impl RandomSource + 'static) -> SharedRandom {
    Arc::new(Mutex::new(Box::new(source)))
}

/// Thread-local RNG backed source used outside of tests
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        let mut rng = rand::rng();
        rng.random_range(0.0..1.0)
    }
}

/// Replays a fixed cycle of samples.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    /// Create a source cycling through `values`
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, pos: 0 }
    }

    /// Source that always returns the same sample
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.2);
        assert_eq!(rng.next_f64(), 0.1);
    }

    #[test]
    fn test_sequence_clamps_out_of_range() {
        let mut rng = SequenceRandom::new(vec![1.5, -0.3]);
        assert!(rng.next_f64() < 1.0);
        assert_eq!(rng.next_f64(), 0.0);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut low = SequenceRandom::constant(0.0);
        let mut high = SequenceRandom::constant(0.999_999);
        assert_eq!(low.range_inclusive(3, 6), 3);
        assert_eq!(high.range_inclusive(3, 6), 6);
    }

    #[test]
    fn test_pick_index_stays_in_bounds() {
        let mut rng = SequenceRandom::constant(0.999_999);
        assert_eq!(rng.pick_index(10), 9);
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn test_chance() {
        let mut rng = SequenceRandom::new(vec![0.2, 0.8]);
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
    }

    #[test]
    fn test_thread_random_in_unit_interval() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
