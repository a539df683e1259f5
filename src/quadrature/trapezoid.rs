//! Cumulative trapezoidal quadrature on a uniform grid

use std::iter;
use ndarray::prelude::*;
use ndarray::Zip;

/// Returns the running trapezoidal integral of `y`, sampled with
/// uniform (and possibly negative) spacing `dx`.
/// The result has the same length as `y` and starts from exactly zero.
pub fn cumulative_trapezoid(y: ArrayView1<f64>, dx: f64) -> Array1<f64> {
    let partial_sums = y.windows(2)
        .into_iter()
        .scan(0.0, |sum, w| {
            *sum += 0.5 * (w[0] + w[1]) * dx;
            Some(*sum)
        });

    iter::once(0.0)
        .chain(partial_sums)
        .take(y.len())
        .collect()
}

/// Integrates dr/dξ = -p, where `p` is a normalized momentum
/// component, from the first point of the grid.
///
/// On the descending phase grid `dxi` is negative, so the two
/// minus signs cancel: a particle with positive momentum moves
/// forward as the pulse passes over it.
pub fn displacement(p: ArrayView1<f64>, dxi: f64) -> Array1<f64> {
    let integrand = p.mapv(|p| -p);
    cumulative_trapezoid(integrand.view(), dxi)
}

/// Largest absolute pointwise difference between two equal-length
/// arrays. NaNs are skipped.
pub fn max_abs_difference(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    Zip::from(&a)
        .and(&b)
        .fold(0.0, |max: f64, &a, &b| max.max((a - b).abs()))
}

/// Estimates the order of convergence p of a quadrature, where the error
/// scales as h^p, from three solutions whose interval counts double
/// from `coarse` to `medium` to `fine`.
/// Returns None if the grids are not nested in this way.
pub fn observed_order(coarse: ArrayView1<f64>, medium: ArrayView1<f64>, fine: ArrayView1<f64>) -> Option<f64> {
    let n = coarse.len();
    if n < 2 || medium.len() != 2 * n - 1 || fine.len() != 4 * n - 3 {
        return None;
    }

    let medium = medium.slice(s![..;2]);
    let fine = fine.slice(s![..;4]);
    let e1 = max_abs_difference(coarse, medium);
    let e2 = max_abs_difference(medium, fine);

    Some((e1 / e2).log2())
}
