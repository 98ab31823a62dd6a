//! Error taxonomy (spec §7).
//!
//! `qvnt` models backend failures with a plain `BackendError` enum; this
//! crate follows the same shape but widens it to the kinds named in spec
//! §7 and derives with `thiserror`, the way the rest of this retrieval
//! pack's crates (`qops-core`, `qops-circuits`, `qops-seraphic`, ...)
//! define their error types. `NumericDriftWarning` has no variant here —
//! per spec §7 it is always recovered locally and only observable via a
//! `tracing::warn!` call (see `register::quant`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A gate or measurement was called with parameters that violate its
    /// precondition (control mask overlapping the target, QFT width < 2,
    /// `j >= k` in `SPS`, an out-of-range measurement index, ...).
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A constructed or loaded register's probability mass fell outside
    /// `[1-ε, 1+ε]`.
    #[error("probability mass {found} is outside [{lo}, {hi}]")]
    NormalizationViolation { found: f64, lo: f64, hi: f64 },

    /// The persisted-state dump/read file could not be opened or parsed.
    #[error("I/O failure on persisted register state: {0}")]
    Io(#[from] std::io::Error),
}
