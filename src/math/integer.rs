//! Classical integer utilities needed by Shor's algorithm: bit counting and
//! reversal, GCD, modular exponentiation, and (compound) primality tests.
//!
//! Grounded in `examples/original_source/utility.cc` (`count_bits`, `GCD`,
//! `Reverse`, `modexp`, `IsPrime`, `IsPrimePower`), rewritten as safe,
//! `usize`-based free functions instead of the C `int`-based globals.

use super::types::N;

/// Number of bits needed to represent `v`, minimum 1 (spec §4.4, B1).
///
/// Unlike `qvnt`'s `count_bits` (which is `v.count_ones()`, i.e. the
/// population count), this is the *width* of `v` — the exponent Shor's
/// algorithm needs to size the first register to hold `M²`.
#[inline]
pub fn count_bits(v: N) -> N {
    let width = N::BITS as N - v.leading_zeros() as N;
    width.max(1)
}

/// Reverse the low `w` bits of `v`. `bit_reverse(bit_reverse(v, w), w) == v`
/// for any `w` wide enough to hold `v` (spec R4).
pub fn bit_reverse(v: N, w: N) -> N {
    let mut result = 0;
    for i in 0..w {
        if (v >> i) & 1 != 0 {
            result |= 1 << (w - 1 - i);
        }
    }
    result
}

/// Euclidean greatest common divisor. `gcd(a, 0) == a` regardless of operand
/// order (spec §4.4).
pub fn gcd(mut a: N, mut b: N) -> N {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Right-to-left square-and-multiply modular exponentiation: `x^y mod m`.
pub fn modexp(x: N, mut y: N, m: N) -> N {
    if m == 1 {
        return 0;
    }
    let mut result = 1u128;
    let mut base = (x as u128) % (m as u128);
    let modulus = m as u128;
    while y > 0 {
        if y & 1 == 1 {
            result = (result * base) % modulus;
        }
        base = (base * base) % modulus;
        y >>= 1;
    }
    result as N
}

/// Trial division up to `floor(sqrt(n))`. `n <= 1` is never prime (spec B3).
pub fn is_prime(n: N) -> bool {
    if n <= 1 {
        return false;
    }
    let limit = (n as f64).sqrt() as N;
    for i in 2..=limit {
        if n % i == 0 {
            return false;
        }
    }
    true
}

/// Is `n` a nontrivial power of a single prime (`n = f^k`, `k >= 2`)?
///
/// Finds the smallest factor `f` with `2 <= f <= floor(sqrt(n))`; if none
/// exists, `n` is prime and this returns `false` (the caller is expected to
/// have already handled the prime case via [`is_prime`]). `f` is
/// initialized to 0 before the search loop — the reference C++ source left
/// it uninitialized, which is the bug named in spec §9 open question 4.
pub fn is_prime_power(n: N) -> bool {
    let limit = (n as f64).sqrt() as N;
    let mut f = 0;
    let mut i = 2;
    while i <= limit && f == 0 {
        if n % i == 0 {
            f = i;
        }
        i += 1;
    }
    if f == 0 {
        return false;
    }
    let log_limit = ((n as f64).ln() / (f as f64).ln()) as N;
    for k in 2..=log_limit {
        if f.pow(k as u32) == n {
            return true;
        }
    }
    false
}
