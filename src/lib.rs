#![allow(clippy::comparison_chain)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod io;
pub mod math;
pub mod operator;
pub mod postproc;
pub mod register;
pub mod rng;

mod tests;

#[doc(hidden)]
pub mod prelude {
    pub use crate::{
        error::SimError,
        math,
        operator::{self as op},
        postproc::period_extract,
        register::QReg,
        rng::{DblUniform, IntUniform, RngSource},
    };
}
