//! Numerical integration of sampled data

mod trapezoid;

pub use self::trapezoid::*;
