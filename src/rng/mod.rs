//! Random-number-generator abstraction (spec §4.5).
//!
//! `qvnt` delegates all randomness to the `rand`/`rand_distr` crates; this
//! spec instead requires an exact, reproducible algorithm (Marsaglia's
//! subtract-with-borrow / lagged-fibonacci generator) so that measurement
//! outcomes are deterministic given fixed seeds — the same requirement the
//! "Virtual RNG interface" re-architecture note in spec §9 calls out ("a
//! scripted sequence" must be substitutable in tests). `rand`/`rand_distr`
//! are accordingly dropped from the dependency list; see DESIGN.md.

mod int_gen;
mod marsaglia;

pub use int_gen::IntUniform;
pub use marsaglia::DblUniform;

use crate::math::R;

/// A source of uniform doubles in `[0, 1)`, with explicit seeding.
///
/// `QReg` owns one of these and uses it for both full-register and
/// per-qubit collapse (spec §4.5).
pub trait RngSource {
    /// Seed the generator. Implementations that ignore one or both seed
    /// values document so.
    fn seed(&mut self, seed1: u32, seed2: u32);

    /// Draw a value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> R;

    /// Draw a value uniformly distributed in `[lo, hi)`.
    fn uniform(&mut self, lo: R, hi: R) -> R {
        lo + (hi - lo) * self.next_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_range_is_respected() {
        let mut rng = DblUniform::new(12345, 6789);
        for _ in 0..1000 {
            let v = rng.uniform(3.0, 7.0);
            assert!((3.0..7.0).contains(&v));
        }
    }
}
