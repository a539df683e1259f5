//! Custom implementations of special functions not
//! provided by the standard lib.

mod erf;

pub use erf::*;
