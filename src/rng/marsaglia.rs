//! Marsaglia subtract-with-borrow ("uniform") double generator.
//!
//! Direct translation of `DblUniformRandGenerator` in
//! `examples/original_source/random.h`, credited there to Paul Bourke /
//! George Marsaglia. Two integer seeds, bounded by 31328 and 30081
//! respectively; a zero seed is replaced with a time-derived value modulo
//! that bound, exactly as the C++ constructor does. The 97-double lagged
//! state and the `i97`/`j97` index dance are kept bit-for-bit so the
//! sequence this produces is reproducible given fixed seeds (spec §4.5).

use std::time::{SystemTime, UNIX_EPOCH};

use super::RngSource;
use crate::math::R;

const SEED1_BOUND: u32 = 31328;
const SEED2_BOUND: u32 = 30081;

pub struct DblUniform {
    u: [R; 97],
    c: R,
    cd: R,
    cm: R,
    i97: usize,
    j97: usize,
}

impl DblUniform {
    pub fn new(seed1: u32, seed2: u32) -> Self {
        let mut rng = Self {
            u: [0.0; 97],
            c: 0.0,
            cd: 0.0,
            cm: 0.0,
            i97: 97,
            j97: 33,
        };
        rng.seed(seed1, seed2);
        rng
    }

    fn time_derived_seeds() -> (u32, u32) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0) as u32;
        (nanos % SEED1_BOUND, nanos.wrapping_mul(2654435761) % SEED2_BOUND)
    }

    fn random_uniform(&mut self) -> R {
        let mut uni = self.u[self.i97 - 1] - self.u[self.j97 - 1];
        if uni <= 0.0 {
            uni += 1.0;
        }
        self.u[self.i97 - 1] = uni;

        self.i97 -= 1;
        if self.i97 == 0 {
            self.i97 = 97;
        }
        self.j97 -= 1;
        if self.j97 == 0 {
            self.j97 = 97;
        }

        self.c -= self.cd;
        if self.c < 0.0 {
            self.c += self.cm;
        }

        uni -= self.c;
        if uni < 0.0 {
            uni += 1.0;
        }
        uni
    }
}

impl RngSource for DblUniform {
    fn seed(&mut self, mut seed1: u32, mut seed2: u32) {
        assert!(seed1 <= SEED1_BOUND, "seed1 must be <= {SEED1_BOUND}");
        assert!(seed2 <= SEED2_BOUND, "seed2 must be <= {SEED2_BOUND}");

        if seed1 == 0 || seed2 == 0 {
            let (s1, s2) = Self::time_derived_seeds();
            seed1 = s1;
            seed2 = s2;
        }

        let mut i = (seed1 / 177) % 177 + 2;
        let mut j = (seed1 % 177) + 2;
        let mut k = (seed2 / 169) % 178 + 1;
        let mut l = seed2 % 169;

        for slot in self.u.iter_mut() {
            let mut s = 0.0;
            let mut t = 0.5;
            for _ in 0..24 {
                let m = (((i * j) % 179) * k) % 179;
                i = j;
                j = k;
                k = m;
                l = (53 * l + 1) % 169;
                if (l * m) % 64 >= 32 {
                    s += t;
                }
                t *= 0.5;
            }
            *slot = s;
        }

        self.c = 362436.0 / 16777216.0;
        self.cd = 7654321.0 / 16777216.0;
        self.cm = 16777213.0 / 16777216.0;
        self.i97 = 97;
        self.j97 = 33;
    }

    fn next_unit(&mut self) -> R {
        self.random_uniform()
    }
}
