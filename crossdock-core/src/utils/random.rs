#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
///
/// All randomness consumed by the engine flows through this trait so that a whole optimization
/// run can be replayed from a fixed seed.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;
}

/// A default random implementation backed by a per-instance seeded generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` with the given seed, making runs repeatable.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.lock().expect("cannot lock rng").gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (max - min).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.lock().expect("cannot lock rng").gen_range(min..max)
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.rng.lock().expect("cannot lock rng").gen_bool(probability.clamp(0., 1.))
    }
}
