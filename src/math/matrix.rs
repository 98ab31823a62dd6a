//! 2x2 unitary matrices and the gate-parameterizations that produce them
//! (spec §3 "Unitary 2x2 matrix", §4.2).
//!
//! Grounded in `examples/original_source/qop.h`'s `opUnitary`, `opRotQubit`,
//! `opRotPhase`, `opPhaseShift`, `opHadamard` and `opNOT` templates, which
//! each build a 2x2 matrix from a handful of angle parameters. Here they are
//! free functions returning [`Matrix2`] rather than template-instantiated
//! gate objects, per the "templated inheritance" re-architecture note in
//! spec §9.

use super::{approx_cmp::*, types::*};

/// Row-major 2x2 unitary: `[a00, a01, a10, a11]`.
pub type Matrix2 = [C; 4];

const FRAC_1_SQRT_2: R = std::f64::consts::FRAC_1_SQRT_2;

/// `RotQubit(θ)`: rotation about the Bloch-sphere Y axis.
pub fn rot_qubit(theta: R) -> Matrix2 {
    let (s, c) = (theta / 2.0).sin_cos();
    [C::new(c, 0.0), C::new(s, 0.0), C::new(-s, 0.0), C::new(c, 0.0)]
}

/// `RotPhase(α)`: `diag(exp(+iα/2), exp(-iα/2))`.
pub fn rot_phase(alpha: R) -> Matrix2 {
    let half = alpha / 2.0;
    [
        C::from_polar(1.0, half),
        C_ZERO_M,
        C_ZERO_M,
        C::from_polar(1.0, -half),
    ]
}

/// `PhaseShift(δ)`: `exp(iδ)·I`, a global phase applied to both diagonal
/// entries (spec §3 notes this is deliberate, not a bug).
pub fn phase_shift(delta: R) -> Matrix2 {
    let phase = C::from_polar(1.0, delta);
    [phase, C_ZERO_M, C_ZERO_M, phase]
}

/// Hadamard: `(1/√2)·[[1,1],[1,-1]]`.
pub fn hadamard() -> Matrix2 {
    let h = C::new(FRAC_1_SQRT_2, 0.0);
    [h, h, h, -h]
}

/// Pauli `X` / NOT / CNOT core matrix: `[[0,1],[1,0]]`.
pub fn not_gate() -> Matrix2 {
    [C_ZERO_M, C_ONE_M, C_ONE_M, C_ZERO_M]
}

/// The general single-qubit unitary `Unitary(α, β, δ, θ)` (spec §4.2).
pub fn unitary(alpha: R, beta: R, delta: R, theta: R) -> Matrix2 {
    let (s, c) = (theta / 2.0).sin_cos();
    let a00 = C::from_polar(c, delta + alpha / 2.0 + beta / 2.0);
    let a01 = C::from_polar(s, delta + alpha / 2.0 - beta / 2.0);
    let a10 = -C::from_polar(s, delta - alpha / 2.0 + beta / 2.0);
    let a11 = C::from_polar(c, delta - alpha / 2.0 - beta / 2.0);
    [a00, a01, a10, a11]
}

const C_ZERO_M: C = C { re: 0.0, im: 0.0 };
const C_ONE_M: C = C { re: 1.0, im: 0.0 };

/// `U†U ≈ I`? Callers are not required to invoke this (spec §3: "the core
/// does not re-check"), but it is useful for tests and debug assertions.
pub fn is_unitary(u: &Matrix2) -> bool {
    let [a00, a01, a10, a11] = u;
    let e00 = a00.norm_sqr() + a10.norm_sqr();
    let e11 = a01.norm_sqr() + a11.norm_sqr();
    let e01 = a00.conj() * a01 + a10.conj() * a11;

    approx_eq_real(e00, 1.0) && approx_eq_real(e11, 1.0) && approx_eq_real(e01.re + e01.im, 0.0)
}

fn approx_eq_real(x: R, y: R) -> bool {
    approx_cmp(x, y)
}
