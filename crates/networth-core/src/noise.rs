//! Uniform draws used for the intra-month fluctuation term.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Unseeded production source. Consecutive runs never repeat.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadNoise;

impl NoiseSource for ThreadNoise {
    fn sample(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible source for scenarios and benchmarks.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Always returns the same value. `FixedNoise(0.45)` cancels the fluctuation bias exactly.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceNoise {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceNoise {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl NoiseSource for SequenceNoise {
    fn sample(&mut self) -> f64 {
        if self.values.is_empty() {
            return NEUTRAL_SAMPLE;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

const NEUTRAL_SAMPLE: f64 = 0.5;
