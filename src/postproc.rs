//! Classical post-processing of a QFT measurement: continued-fraction
//! period extraction (spec §4.4), grounded in
//! `examples/original_source/utility.cc`'s `PeriodExtract`.

use crate::math::{gcd, Z};

/// Recover a candidate period `q` from a measured QFT outcome `v`, the
/// number `modulus` being factored, and the Fourier-domain size `domain =
/// 2^first` (spec §4.4).
///
/// `v == 0` carries no information and returns `0` immediately. Otherwise
/// the fraction `v/domain` is reduced; if the reduced denominator is
/// already below `modulus` it *is* the period. Otherwise a continued-
/// fraction expansion of `v/domain` is walked until a convergent's
/// denominator would reach or exceed `modulus`, backing off one step if
/// the loop's last iteration overshot exactly onto it.
pub fn period_extract(v: Z, modulus: Z, domain: Z) -> Z {
    if v == 0 {
        return 0;
    }

    let divisor = gcd(v as usize, domain as usize) as Z;
    let v = v / divisor;
    let domain = domain / divisor;

    let (p1, q1) = if domain < modulus {
        (v, domain)
    } else {
        let a0 = v / domain;
        let e0 = (v as f64 / domain as f64 - a0 as f64).abs();
        let a1 = (1.0 / e0) as Z;
        let mut e1 = (1.0 / e0 - a1 as f64).abs();

        let mut p0 = a0;
        let mut p1 = a1 * a0 + 1;
        let mut q0 = 1;
        let mut q1 = a1;
        let mut q_next = 0;

        while e1 > 1.0 / domain as f64 && q_next < modulus {
            let a_next = (1.0 / e1) as Z;
            let p_next = a_next * p1 + p0;
            q_next = a_next * q1 + q0;
            let e_next = (1.0 / e1 - a_next as f64).abs();

            q0 = q1;
            p0 = p1;
            q1 = q_next;
            p1 = p_next;
            e1 = e_next;
        }

        if q1 == q_next {
            q1 = q0;
            p1 = p0;
        }

        (p1, q1)
    };

    q1 / gcd(p1.unsigned_abs(), q1.unsigned_abs()) as Z
}
