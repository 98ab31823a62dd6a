//! Cross-module scenario tests: each one pins a concrete, literal
//! input/output pair rather than a general property, complementing the
//! per-module `#[cfg(test)]` blocks that exercise the same machinery in
//! isolation.

#![cfg(test)]

use crate::{
    math::{bit_reverse, count_bits, gcd, is_prime, matrix::*, modexp},
    operator::{apply_controlled, apply_single, mod_exp, qft},
    postproc::period_extract,
    register::QReg,
};

const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
const FRAC_1_SQRT_8: f64 = 0.353_553_390_593_273_8;

// Invariants ----------------------------------------------------

#[test]
fn fresh_register_total_probability_is_one() {
    for n in 1..=6 {
        let reg = QReg::new(n);
        assert!((reg.total_probability() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn gate_application_preserves_total_probability() {
    let mut reg = QReg::new(3);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 1, &rot_qubit(0.37)).unwrap();
    apply_single(&mut reg, 2, &not_gate()).unwrap();
    assert!((reg.total_probability() - 1.0).abs() < 1e-9);
}

#[test]
fn controlled_gate_preserves_total_probability() {
    let mut reg = QReg::new(3);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 1, &hadamard()).unwrap();
    apply_controlled(&mut reg, 0b011, 2, &not_gate()).unwrap();
    assert!((reg.total_probability() - 1.0).abs() < 1e-9);
}

#[test]
fn full_measurement_leaves_exactly_one_amplitude_set() {
    let mut reg = QReg::new(2);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 1, &hadamard()).unwrap();
    let outcome = reg.measure();
    for i in 0..reg.outcomes() {
        let expected = if i == outcome { 1.0 } else { 0.0 };
        assert!((reg.get(i).norm_sqr() - expected).abs() < 1e-12);
    }
    assert!((reg.total_probability() - 1.0).abs() < 1e-12);
}

#[test]
fn per_qubit_measurement_leaves_only_matching_bit_surviving() {
    let mut reg = QReg::new(2);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 1, &hadamard()).unwrap();
    let b = reg.measure_qubit(0).unwrap();
    for i in 0..reg.outcomes() {
        if reg.get(i).norm_sqr() > 1e-12 {
            assert_eq!((i & 1) as u8, b);
        }
    }
    assert!((reg.total_probability() - 1.0).abs() < 1e-12);
}

#[test]
fn mod_exp_preserves_the_multiset_of_nonzero_amplitudes() {
    let mut reg = QReg::with_uniform_prefix(8, 4).unwrap();
    let before: Vec<_> = (0..reg.outcomes())
        .map(|i| reg.get(i))
        .filter(|a| a.norm_sqr() > 1e-12)
        .collect();
    mod_exp(&mut reg, 2, 15, 4).unwrap();
    let after: Vec<_> = (0..reg.outcomes())
        .map(|i| reg.get(i))
        .filter(|a| a.norm_sqr() > 1e-12)
        .collect();
    assert_eq!(before.len(), after.len());
    for amp in &before {
        assert!(after.iter().any(|a| (a - amp).norm_sqr() < 1e-18));
    }
}

// Round-trip / idempotence ---------------------------------------

#[test]
fn hadamard_applied_twice_is_the_identity() {
    let mut reg = QReg::new(1);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    assert!((reg.get(0).re - 1.0).abs() < 1e-9);
    assert!(reg.get(0).im.abs() < 1e-9);
    assert!(reg.get(1).norm_sqr() < 1e-9);
}

#[test]
fn not_applied_twice_is_the_identity() {
    let mut reg = QReg::new(1);
    apply_single(&mut reg, 0, &not_gate()).unwrap();
    apply_single(&mut reg, 0, &not_gate()).unwrap();
    assert!((reg.get(0).re - 1.0).abs() < 1e-12);
    assert!(reg.get(1).norm_sqr() < 1e-12);
}

#[test]
fn dump_then_read_reconstructs_the_original_register() {
    let half = crate::math::C::new(FRAC_1_SQRT_2, 0.0);
    let reg = QReg::new_with_amplitudes(1, vec![half, half]).unwrap();
    let mut buf = Vec::new();
    crate::io::dump(&reg, &mut buf).unwrap();
    let restored = crate::io::read(1, std::io::Cursor::new(buf)).unwrap();
    for i in 0..reg.outcomes() {
        assert!((reg.get(i) - restored.get(i)).norm_sqr() < 1e-18);
    }
}

#[test]
fn bit_reverse_round_trips_for_wide_enough_width() {
    for v in 0..64usize {
        let w = count_bits(v).max(6);
        assert_eq!(bit_reverse(bit_reverse(v, w), w), v);
    }
}

#[test]
fn gcd_of_modexp_order_divides_modulus() {
    // x=7 has order 4 mod 15 (7^4 = 2401 = 160*15 + 1).
    let (x, period, modulus) = (7usize, 4usize, 15usize);
    assert_eq!(modexp(x, period, modulus), 1);
    assert_eq!(modulus % gcd(modexp(x, period, modulus), modulus), 0);
}

// Boundary behaviors ----------------------------------------------

#[test]
fn count_bits_of_zero_is_one() {
    assert_eq!(count_bits(0), 1);
}

#[test]
fn period_extract_of_zero_measurement_is_zero() {
    assert_eq!(period_extract(0, 15, 256), 0);
    assert_eq!(period_extract(0, 7, 64), 0);
}

#[test]
fn is_prime_is_false_at_and_below_one() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
}

#[test]
fn single_qubit_coin_flip_converges_to_one_half() {
    let mut heads = 0;
    let trials = 4000;
    for seed in 1..=trials as u32 {
        let half = crate::math::C::new(FRAC_1_SQRT_2, 0.0);
        let mut reg = QReg::with_amplitudes_and_seed(
            1,
            vec![half, half],
            seed,
            seed.wrapping_mul(2654435761) + 1,
        )
        .unwrap();
        if reg.measure() == 1 {
            heads += 1;
        }
    }
    let freq = heads as f64 / trials as f64;
    assert!((freq - 0.5).abs() < 0.05, "frequency {freq} too far from 0.5");
}

// Concrete end-to-end scenarios ------------------------------------

#[test]
fn hadamard_on_fresh_qubit_yields_equal_superposition() {
    let mut reg = QReg::new(1);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    assert!((reg.get(0).re - FRAC_1_SQRT_2).abs() < 1e-9);
    assert!((reg.get(1).re - FRAC_1_SQRT_2).abs() < 1e-9);
    assert!(reg.get(0).im.abs() < 1e-9 && reg.get(1).im.abs() < 1e-9);
}

#[test]
fn hadamard_then_hadamard_returns_to_ground_state() {
    let mut reg = QReg::new(1);
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    apply_single(&mut reg, 0, &hadamard()).unwrap();
    assert!((reg.get(0).re - 1.0).abs() < 1e-9);
    assert!(reg.get(1).norm_sqr() < 1e-9);
}

#[test]
fn cnot_permutes_the_controlled_subspace() {
    // control = bit 0, target = bit 1, amplitudes (1/sqrt2, 0, 0, 1/sqrt2).
    // Index 0 (bit0=0, bit1=0) has its control bit clear and is left
    // alone. Index 1 (bit0=1, bit1=0) has its control bit set, so it is
    // paired with index 3 (bit0=1, bit1=1) and the NOT matrix swaps
    // their amplitudes: 0 and 1/sqrt2 trade places.
    let half = crate::math::C::new(FRAC_1_SQRT_2, 0.0);
    let zero = crate::math::C::new(0.0, 0.0);
    let mut reg = QReg::new_with_amplitudes(2, vec![half, zero, zero, half]).unwrap();
    apply_controlled(&mut reg, 0b01, 1, &not_gate()).unwrap();
    assert!((reg.get(0b00) - half).norm_sqr() < 1e-18);
    assert!((reg.get(0b01) - half).norm_sqr() < 1e-18);
    assert!(reg.get(0b10).norm_sqr() < 1e-18);
    assert!(reg.get(0b11).norm_sqr() < 1e-18);
}

#[test]
fn qft_width_three_on_ground_state_is_uniform() {
    let mut reg = QReg::new(3);
    qft(&mut reg, 3).unwrap();
    for i in 0..reg.outcomes() {
        assert!((reg.get(i).re - FRAC_1_SQRT_8).abs() < 1e-9);
        assert!(reg.get(i).im.abs() < 1e-9);
    }
}

#[test]
fn mod_exp_of_two_mod_fifteen_permutes_four_basis_states() {
    let half = crate::math::C::new(0.5, 0.0);
    let zero = crate::math::C::new(0.0, 0.0);
    let mut amplitudes = vec![zero; 1 << 8];
    amplitudes[0] = half;
    amplitudes[1] = half;
    amplitudes[2] = half;
    amplitudes[3] = half;
    let mut reg = QReg::new_with_amplitudes(8, amplitudes).unwrap();

    mod_exp(&mut reg, 2, 15, 4).unwrap();

    assert!((reg.get(0 + (1 << 4)) - half).norm_sqr() < 1e-18);
    assert!((reg.get(1 + (2 << 4)) - half).norm_sqr() < 1e-18);
    assert!((reg.get(2 + (4 << 4)) - half).norm_sqr() < 1e-18);
    assert!((reg.get(3 + (8 << 4)) - half).norm_sqr() < 1e-18);
}

#[test]
fn period_extract_recovers_period_two_from_half_domain_fraction() {
assert_eq!(period_extract(128, 15, 256), 2);
}
