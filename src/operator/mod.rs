//! Gate application (spec §4.2).
//!
//! `qvnt` builds lazy [`SingleOp`]/[`MultiOp`] gate objects that are
//! assembled into a circuit and only touch the register's amplitudes when
//! [`QReg::apply`](crate::register::QReg) runs them. This spec has exactly
//! five gate-shaped operations (single-qubit, controlled single-qubit,
//! QFT, the "apply to all" adapter, and the ModExp oracle — spec §6), so
//! the lazy-object machinery is dropped in favor of plain functions that
//! mutate a [`QReg`] directly, matching the "driver ⇄ core contract" in
//! spec §6: a callable of shape `(register, target)`, `(register,
//! control_mask, target)`, or `(register, ...params)`.

use num_complex::Complex;

use crate::{
    error::SimError,
    math::{count_bits, matrix::*, modexp as modexp_classical, N},
    register::QReg,
};

/// Apply the 2x2 unitary `u` to qubit `t` of `reg` (spec §4.2 "Single-qubit
/// gate").
///
/// For every basis index `k` with bit `t` clear, the pair `(k, k | 1<<t)`
/// is updated together and each pair is visited exactly once, avoiding the
/// mid-update corruption the spec warns about.
pub fn apply_single(reg: &mut QReg, t: N, u: &Matrix2) -> Result<(), SimError> {
    if t >= reg.qubits() {
        return Err(SimError::PreconditionViolation(format!(
            "target qubit {t} out of range for {}-qubit register",
            reg.qubits()
        )));
    }

    let [a00, a01, a10, a11] = *u;
    let bit = 1usize << t;
    let amps = reg.amplitudes_mut();
    for k in 0..amps.len() {
        if k & bit != 0 {
            continue;
        }
        let partner = k | bit;
        let old_k = amps[k];
        let old_p = amps[partner];
        amps[k] = a00 * old_k + a01 * old_p;
        amps[partner] = a10 * old_k + a11 * old_p;
    }
    Ok(())
}

/// Apply the 2x2 unitary `u` to qubit `t` of `reg`, conditioned on every
/// control bit in `mask` being set (spec §4.2 "Controlled single-qubit
/// gate").
///
/// The reference source tests only `(k & m) != 0` — any control bit set.
/// That is wrong for multi-control masks (it breaks unitarity, since a
/// basis state with only *some* controls set would still be transformed).
/// This applies the transform only when `(k & m) == m` — all controls set
/// — per the correction in spec §4.2 / §9 open question 2.
pub fn apply_controlled(reg: &mut QReg, mask: N, t: N, u: &Matrix2) -> Result<(), SimError> {
    if t >= reg.qubits() {
        return Err(SimError::PreconditionViolation(format!(
            "target qubit {t} out of range for {}-qubit register",
            reg.qubits()
        )));
    }
    if mask & (1usize << t) != 0 {
        return Err(SimError::PreconditionViolation(format!(
            "control mask {mask:#x} overlaps target qubit {t}"
        )));
    }

    let [a00, a01, a10, a11] = *u;
    let bit = 1usize << t;
    let amps = reg.amplitudes_mut();
    for k in 0..amps.len() {
        if k & bit != 0 {
            continue;
        }
        let partner = k | bit;
        if k & mask != mask {
            continue;
        }
        let old_k = amps[k];
        let old_p = amps[partner];
        amps[k] = a00 * old_k + a01 * old_p;
        amps[partner] = a10 * old_k + a11 * old_p;
    }
    Ok(())
}

/// "Apply to all bits" adapter (spec §4.2): apply a parameter-free
/// single-qubit gate to every qubit `0..n`, in order. Used to realize the
/// Walsh-Hadamard transform.
pub fn apply_to_all(reg: &mut QReg, u: &Matrix2) -> Result<(), SimError> {
    for t in 0..reg.qubits() {
        apply_single(reg, t, u)?;
    }
    Ok(())
}

/// Shor's controlled phase shift `SPS(j, k)` (spec §4.2): control = bit
/// `j`, target = bit `k`, matrix `Unitary(δ, 0, -δ/2, 0)` with `δ = π /
/// 2^(k-j)`. Used inside [`qft`].
pub fn sps(reg: &mut QReg, j: N, k: N) -> Result<(), SimError> {
    if j >= k {
        return Err(SimError::PreconditionViolation(format!(
            "SPS requires j < k, got j={j}, k={k}"
        )));
    }
    let delta = std::f64::consts::PI / (1u64 << (k - j)) as f64;
    let u = unitary(delta, 0.0, -delta / 2.0, 0.0);
    apply_controlled(reg, 1usize << j, k, &u)
}

/// Quantum Fourier Transform over the low `width` qubits of `reg` (spec
/// §4.2). For `j` from `width-1` down to `0`, apply `SPS(j, k)` for every
/// `k` from `width-1` down to `j+1`, then a Hadamard on bit `j`.
///
/// The resulting amplitude ordering is bit-reversed relative to the
/// standard DFT; callers must run [`crate::math::bit_reverse`] on any
/// classical readout (spec §4.2, §4.4).
pub fn qft(reg: &mut QReg, width: N) -> Result<(), SimError> {
    if width < 2 || width > reg.qubits() {
        return Err(SimError::PreconditionViolation(format!(
            "QFT width {width} must satisfy 2 <= width <= {} (qubit count)",
            reg.qubits()
        )));
    }

    for j in (0..width).rev() {
        for k in ((j + 1)..width).rev() {
            sps(reg, j, k)?;
        }
        apply_single(reg, j, &hadamard())?;
    }
    Ok(())
}

/// Modular-exponentiation oracle (spec §4.2). The register is notionally
/// split into a "first" sub-register (bits `0..shift`) and a "second"
/// sub-register (bits `shift..`). For every basis index `i` with nonzero
/// amplitude, maps it to `dest = i + ((a^i mod modulus) << shift)`; every
/// other destination in the scratch buffer is left at zero.
///
/// Driver contract: the second sub-register must be `0` before the call,
/// or destinations collide and amplitudes are silently overwritten (spec
/// §4.2). This is not checked here — checking it would cost an O(N) scan
/// the driver has already paid for when it constructed the register via
/// [`QReg::with_uniform_prefix`].
pub fn mod_exp(reg: &mut QReg, a: N, modulus: N, shift: N) -> Result<(), SimError> {
    if shift >= reg.qubits() {
        return Err(SimError::PreconditionViolation(format!(
            "shift {shift} must be < qubit count {}",
            reg.qubits()
        )));
    }

    let n = reg.outcomes();
    let mut scratch = vec![Complex::new(0.0, 0.0); n];
    for i in 0..n {
        let amp = reg.get(i);
        if amp == Complex::new(0.0, 0.0) {
            continue;
        }
        let f = modexp_classical(a, i, modulus);
        let dest = i + (f << shift);
        if dest < n {
            scratch[dest] += amp;
        }
    }

    let amps = reg.amplitudes_mut();
    amps.copy_from_slice(&scratch);
    Ok(())
}

/// Fourier-domain width `count_bits(modulus * modulus)` used to size the
/// first sub-register before calling [`mod_exp`] (grounded in
/// `examples/original_source/main.cc`'s `first = count_bits(M * M)`).
pub fn first_register_width(modulus: N) -> N {
    count_bits(modulus * modulus)
}
