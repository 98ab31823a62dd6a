//! Integer-uniform generator: a thin truncating wrapper over [`DblUniform`]
//! (spec §4.5, mirroring `IntUniformRandGenerator` in
//! `examples/original_source/random.h`, which wraps
//! `DblUniformRandGenerator` the same way).

use super::{DblUniform, RngSource};
use crate::math::N;

pub struct IntUniform {
    inner: DblUniform,
}

impl IntUniform {
    pub fn new(seed1: u32, seed2: u32) -> Self {
        Self {
            inner: DblUniform::new(seed1, seed2),
        }
    }

    /// Draw an integer uniformly in `[0, bound)`.
    pub fn below(&mut self, bound: N) -> N {
        if bound == 0 {
            return 0;
        }
        (self.inner.next_unit() * bound as f64) as N
    }
}

impl RngSource for IntUniform {
    fn seed(&mut self, seed1: u32, seed2: u32) {
        self.inner.seed(seed1, seed2);
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.next_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_stays_in_range() {
        let mut rng = IntUniform::new(5, 5);
        for _ in 0..5000 {
            let v = rng.below(16);
            assert!(v < 16);
        }
    }

    #[test]
    fn below_zero_bound_is_zero() {
        let mut rng = IntUniform::new(5, 5);
        assert_eq!(rng.below(0), 0);
    }
}
