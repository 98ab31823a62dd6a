//! The quantum register: the heart of this crate (spec §3, §4.1).
//!
//! `qvnt` splits this into a pluggable `Backend` trait plus `QReg`/`CReg`/
//! `VReg` wrapper types. This spec has exactly one representation (dense
//! state vector, single-threaded — see spec §5 Non-goals), so the backend
//! indirection and the classical/virtual register wrappers are dropped;
//! `QReg` owns its amplitude vector directly.

mod quant;

pub use quant::QReg;
