//! Error function
//!
//! Currently implemented:
//!
//! * erf(x) and erfc(x) for real argument.
//!
//! Algorithms adapted from:
//!
//! * M. Abramowitz and I. A. Stegun,
//!   "Handbook of Mathematical Functions", §7.1.6 and §7.1.14

use std::f64::consts;

pub trait Erf: Sized {
    /// Returns the value of the error function,
    /// erf(x) = 2/sqrt(pi) \int_0^x exp(-t^2) dt.
    /// NaN is passed through.
    fn erf(&self) -> Self;

    /// Returns the value of the complementary error function,
    /// erfc(x) = 1 - erf(x), without loss of precision for large x.
    #[allow(unused)]
    fn erfc(&self) -> Self;
}

/// Below this magnitude, the power series is used
const SERIES_CUTOFF: f64 = 3.0;
const SERIES_MAX_TERMS: usize = 200;
/// Number of levels at which the continued fraction is truncated
const FRACTION_DEPTH: usize = 80;

impl Erf for f64 {
    fn erf(&self) -> Self {
        let x = *self;
        if x.is_nan() {
            x
        } else if x.abs() < SERIES_CUTOFF {
            erf_series(x)
        } else {
            x.signum() * (1.0 - erfc_fraction(x.abs()))
        }
    }

    fn erfc(&self) -> Self {
        let x = *self;
        if x.is_nan() {
            x
        } else if x.abs() < SERIES_CUTOFF {
            1.0 - erf_series(x)
        } else if x > 0.0 {
            erfc_fraction(x)
        } else {
            2.0 - erfc_fraction(-x)
        }
    }
}

/// Sums
///   erf(x) = 2x exp(-x^2) / sqrt(pi) Σ_n (2x^2)^n / [1·3·…·(2n+1)],
/// in which every term is positive.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 1..SERIES_MAX_TERMS {
        term *= 2.0 * x2 / (2 * n + 1) as f64;
        sum += term;
        if term < f64::EPSILON * sum {
            break;
        }
    }
    consts::FRAC_2_SQRT_PI * x * (-x2).exp() * sum
}

/// Evaluates
///   erfc(x) = exp(-x^2) / sqrt(pi) · 1/(x + (1/2)/(x + 1/(x + (3/2)/(x + ...))))
/// from the tail, for x > 0.
fn erfc_fraction(x: f64) -> f64 {
    let t = (1..=FRACTION_DEPTH)
        .rev()
        .fold(x, |t, k| x + 0.5 * (k as f64) / t);
    (-x * x).exp() / (consts::PI.sqrt() * t)
}
