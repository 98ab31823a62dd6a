//! Scalar and bit-level primitives shared across the crate.
//!
//! Mirrors the role of `qvnt`'s own `math` module: a small set of type
//! aliases and const helpers that every other module imports via `use
//! crate::math::*;`, plus the classical integer utilities needed by Shor's
//! algorithm (gcd, modular exponentiation, primality).

pub mod approx_cmp;
pub mod integer;
pub mod matrix;

pub use self::{integer::*, matrix::*, types::*};

mod types {
    /// Qubit / basis-state index type.
    pub type N = usize;
    /// Signed counterpart, used where subtraction can go negative.
    pub type Z = isize;

    /// Real scalar.
    pub type R = f64;
    /// Complex amplitude.
    pub type C = num_complex::Complex<R>;

    /// A bitmask selecting a subset of qubits (e.g. the control mask of a
    /// multi-controlled gate).
    pub type Mask = usize;
}

pub const C_ONE: C = C { re: 1.0, im: 0.0 };
pub const C_ZERO: C = C { re: 0.0, im: 0.0 };

/// Tolerance used for every "probability mass equals 1" assertion, and for
/// "amplitude is effectively zero" checks used by the display/skip-zero
/// paths. See spec §3 and §4.3.
pub const EPS: R = 1e-12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_sane() {
        assert_eq!(C_ONE.norm_sqr(), 1.0);
        assert_eq!(C_ZERO.norm_sqr(), 0.0);
        assert!(EPS > 0.0 && EPS < 1e-6);
    }
}
