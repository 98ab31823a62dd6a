//! The concrete quantum register (spec §3, §4.1, §4.3).
//!
//! `qvnt`'s `Reg<B: Backend>` is generic over a pluggable amplitude-storage
//! backend and delegates randomness to `rand`/`rand_distr`. This spec names
//! exactly one representation — a dense, single-threaded state vector (spec
//! §5 Non-goals) — and an exact, reproducible RNG (spec §4.5), so `QReg`
//! owns its amplitude vector and its [`DblUniform`] generator directly
//! instead of going through a backend trait.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::{
    error::SimError,
    math::{approx_cmp::*, C, N, R, C_ONE, C_ZERO, EPS},
    rng::{DblUniform, RngSource},
};

/// An n-qubit register: `2^n` complex amplitudes plus the RNG used to
/// collapse them.
///
/// Basis convention: index `i`'s binary expansion gives the qubit values,
/// bit 0 being the least significant qubit (spec §3).
pub struct QReg {
    qubit_count: N,
    amplitudes: Vec<C>,
    rng: DblUniform,
}

impl QReg {
    /// `2^n` amplitudes, index 0 set to 1, all others 0 (spec §4.1 `new`).
    pub fn new(qubit_count: N) -> Self {
        Self::with_seed(qubit_count, 0, 0)
    }

    /// Like [`QReg::new`], but with an explicit RNG seed pair. A seed of
    /// `0` falls back to a time-derived value, same as [`DblUniform`].
    pub fn with_seed(qubit_count: N, seed1: u32, seed2: u32) -> Self {
        assert!(qubit_count >= 1, "qubit_count must be >= 1");
        let mut amplitudes = vec![C_ZERO; 1usize << qubit_count];
        amplitudes[0] = C_ONE;
        Self {
            qubit_count,
            amplitudes,
            rng: DblUniform::new(seed1, seed2),
        }
    }

    /// Construct a register from caller-supplied amplitudes. Requires
    /// `amplitudes.len() == 2^n` and `Σ|amplitudes[i]|² ∈ [1-ε, 1+ε]`
    /// (spec §4.1 `new_with_amplitudes`).
    pub fn new_with_amplitudes(qubit_count: N, amplitudes: Vec<C>) -> Result<Self, SimError> {
        Self::with_amplitudes_and_seed(qubit_count, amplitudes, 0, 0)
    }

    pub fn with_amplitudes_and_seed(
        qubit_count: N,
        amplitudes: Vec<C>,
        seed1: u32,
        seed2: u32,
    ) -> Result<Self, SimError> {
        assert!(qubit_count >= 1, "qubit_count must be >= 1");
        let expected = 1usize << qubit_count;
        if amplitudes.len() != expected {
            return Err(SimError::PreconditionViolation(format!(
                "expected {expected} amplitudes for {qubit_count} qubits, got {}",
                amplitudes.len()
            )));
        }

        let total: R = amplitudes.iter().map(C::norm_sqr).sum();
        if !(1.0 - EPS..=1.0 + EPS).contains(&total) {
            return Err(SimError::NormalizationViolation {
                found: total,
                lo: 1.0 - EPS,
                hi: 1.0 + EPS,
            });
        }

        Ok(Self {
            qubit_count,
            amplitudes,
            rng: DblUniform::new(seed1, seed2),
        })
    }

    /// A register whose first `prefix_width` qubits start in equal
    /// superposition and whose remaining qubits start at zero — the setup
    /// Shor's algorithm needs before applying `ModExp` (spec §3 lifecycle
    /// step (c), grounded in `examples/original_source/main.cc`'s
    /// `StateCoefs` initialization loop).
    pub fn with_uniform_prefix(qubit_count: N, prefix_width: N) -> Result<Self, SimError> {
        Self::with_uniform_prefix_and_seed(qubit_count, prefix_width, 0, 0)
    }

    pub fn with_uniform_prefix_and_seed(
        qubit_count: N,
        prefix_width: N,
        seed1: u32,
        seed2: u32,
    ) -> Result<Self, SimError> {
        if prefix_width > qubit_count {
            return Err(SimError::PreconditionViolation(format!(
                "prefix_width {prefix_width} exceeds qubit_count {qubit_count}"
            )));
        }
        let state_count = 1usize << qubit_count;
        let prefix_count = 1usize << prefix_width;
        let amp = 1.0 / (prefix_count as R).sqrt();
        let mut amplitudes = vec![C_ZERO; state_count];
        for a in amplitudes.iter_mut().take(prefix_count) {
            *a = C::new(amp, 0.0);
        }
        Self::with_amplitudes_and_seed(qubit_count, amplitudes, seed1, seed2)
    }

    #[inline]
    pub fn outcomes(&self) -> N {
        self.amplitudes.len()
    }

    #[inline]
    pub fn qubits(&self) -> N {
        self.qubit_count
    }

    #[inline]
    pub fn get(&self, i: N) -> C {
        self.amplitudes[i]
    }

    #[inline]
    pub fn set(&mut self, i: N, c: C) {
        self.amplitudes[i] = c;
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [C] {
        &mut self.amplitudes
    }

    /// `Σ|amplitudes[i]|²`. Used both as a diagnostic and as the upper
    /// bound of the random draw in [`QReg::measure`], so numerical drift
    /// still produces a valid sample (spec §4.1, §4.3).
    pub fn total_probability(&self) -> R {
        self.amplitudes.iter().map(C::norm_sqr).sum()
    }

    /// Collapse amplitudes back to `|0...0>`.
    pub fn reset(&mut self) {
        self.amplitudes.fill(C_ZERO);
        self.amplitudes[0] = C_ONE;
    }

    /// Full-register measurement and collapse (spec §4.3 "Full-register
    /// collapse"): draw a threshold in `[0, P)`, walk the amplitudes from a
    /// randomized starting index accumulating probability mass, and stop
    /// at the first index whose cumulative mass reaches the threshold.
    /// If the walk wraps all the way around without crossing it (numerical
    /// drift), fall back to the index just before the start and warn.
    pub fn measure(&mut self) -> N {
        let total = self.total_probability();
        let threshold = self.rng.uniform(0.0, total);

        let n = self.outcomes();
        let start = (self.rng.next_unit() * n as R) as N % n;

        let mut acc = 0.0;
        let mut i = start;
        let result = loop {
            acc += self.amplitudes[i].norm_sqr();
            if acc >= threshold {
                break i;
            }
            i = (i + 1) % n;
            if i == start {
                warn!(
                    start,
                    threshold, total, "measurement walk wrapped without crossing threshold"
                );
                break if start == 0 { n - 1 } else { start - 1 };
            }
        };

        self.amplitudes.fill(C_ZERO);
        self.amplitudes[result] = C_ONE;
        debug!(result, "full-register measurement collapsed");
        result
    }

    /// Single-qubit measurement and collapse of bit `t` (spec §4.3
    /// "Single-qubit collapse"). Returns the observed bit.
    pub fn measure_qubit(&mut self, t: N) -> Result<u8, SimError> {
        if t >= self.qubit_count {
            return Err(SimError::PreconditionViolation(format!(
                "qubit index {t} out of range for {}-qubit register",
                self.qubit_count
            )));
        }

        let total = self.total_probability();
        let mut p1 = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if (i >> t) & 1 != 0 {
                p1 += amp.norm_sqr();
            }
        }
        let p0 = total - p1;

        let r = self.rng.uniform(0.0, total);
        let outcome: u8 = if r > p0 { 1 } else { 0 };
        let norm = if outcome == 1 { p1 } else { p0 }.sqrt();

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit = ((i >> t) & 1) as u8;
            if bit == outcome {
                *amp /= norm;
            } else {
                *amp = C_ZERO;
            }
        }

        trace!(t, outcome, p0, p1, "single-qubit measurement collapsed");
        Ok(outcome)
    }

    /// Measure every qubit named by `mask`, ascending, and return the
    /// integer whose bit `t` is the observed outcome of qubit `t` for
    /// every set bit of `mask` (spec §4.3 "Subset collapse"; spec §9 open
    /// question 3 — the original C++ discards this value, this rewrite
    /// returns it explicitly).
    pub fn measure_subset(&mut self, mask: N) -> Result<N, SimError> {
        let mut result = 0;
        for t in 0..self.qubit_count {
            if (mask >> t) & 1 != 0 {
                let bit = self.measure_qubit(t)?;
                result |= (bit as N) << t;
            }
        }
        Ok(result)
    }

    /// Is `amplitudes[i]` within `ε` of zero in both components? Used by
    /// display/skip-zero paths (spec §3).
    pub(crate) fn is_negligible_at(&self, i: N) -> bool {
        is_negligible(&self.amplitudes[i])
    }

    pub(crate) fn within_normalization_tolerance(&self) -> bool {
        within_eps(self.total_probability(), 1.0)
    }
}

impl fmt::Debug for QReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_SHOWN: N = 8;
        let shown = self.amplitudes.len().min(MAX_SHOWN);
        let mut dbg = f.debug_struct("QReg");
        for (idx, amp) in self.amplitudes.iter().enumerate().take(shown) {
            dbg.field(&format!("{idx}"), amp);
        }
        if self.amplitudes.len() > MAX_SHOWN {
            dbg.finish_non_exhaustive()
        } else {
            dbg.finish()
        }
    }
}
