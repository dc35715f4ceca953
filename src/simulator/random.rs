use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`, both ends included.
    fn between(&mut self, low: u64, high: u64) -> u64;
}

/// Thread-local generator, freshly seeded by the OS.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic generator for reproducible runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }
}
