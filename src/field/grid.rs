//! Uniform sampling of the co-moving phase

use ndarray::prelude::*;

/// Default half-width of the grid, in units of the pulse duration
pub const DEFAULT_EXTENT: f64 = 4.0;

/// An equally spaced sample of the phase ξ = z - t, which runs
/// from positive to negative values.
///
/// The descending order is paired with the sign of the integrand
/// in [`displacement`](crate::quadrature::displacement): together
/// they give trajectories with the expected orientation, so neither
/// should be changed on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseGrid {
    phase: Array1<f64>,
    step: f64,
}

impl PhaseGrid {
    /// Samples `n` points spanning [4 tau, -4 tau]
    #[allow(unused)]
    pub fn new(tau: f64, n: usize) -> Self {
        Self::with_extent(tau, DEFAULT_EXTENT, n)
    }

    /// Samples `n` points spanning [extent * tau, -extent * tau].
    /// With fewer than two points the spacing is undefined, and is
    /// returned as NaN.
    pub fn with_extent(tau: f64, extent: f64, n: usize) -> Self {
        let start = extent * tau;
        let stop = -extent * tau;
        let phase = Array1::linspace(start, stop, n);
        let step = if n > 1 {
            (stop - start) / ((n - 1) as f64)
        } else {
            f64::NAN
        };
        PhaseGrid {
            phase,
            step,
        }
    }

    pub fn phase(&self) -> ArrayView1<f64> {
        self.phase.view()
    }

    /// The signed spacing dξ, negative for a descending grid
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.phase.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*;

    #[test]
    fn descending() {
        let tau = 10.0 * consts::PI;
        let grid = PhaseGrid::new(tau, 10_000);
        let xi = grid.phase();
        println!("xi[0] = {:.6}, xi[n-1] = {:.6}, dxi = {:.6e}", xi[0], xi[xi.len()-1], grid.step());

        assert_eq!(grid.len(), 10_000);
        assert_eq!(xi[0], 40.0 * consts::PI);
        assert!((xi[9_999] + 40.0 * consts::PI).abs() < 1.0e-12);
        assert!(grid.step() < 0.0);
        assert!((grid.step() + 80.0 * consts::PI / 9_999.0).abs() < 1.0e-15);
        assert!(xi.windows(2).into_iter().all(|w| w[1] < w[0]));

        let uniform = xi.windows(2)
            .into_iter()
            .all(|w| ((w[1] - w[0]) - grid.step()).abs() < 1.0e-10);
        assert!(uniform);
    }

    #[test]
    fn custom_extent() {
        let grid = PhaseGrid::with_extent(2.0, 1.5, 7);
        assert_eq!(grid.phase().to_vec(), vec![3.0, 2.0, 1.0, 0.0, -1.0, -2.0, -3.0]);
        assert_eq!(grid.step(), -1.0);
    }

    #[test]
    fn degenerate() {
        let single = PhaseGrid::new(1.0, 1);
        assert_eq!(single.len(), 1);
        assert_eq!(single.phase()[0], 4.0);
        assert!(single.step().is_nan());

        let empty = PhaseGrid::new(1.0, 0);
        assert!(empty.is_empty());

        // tau = 0 collapses the grid onto the origin
        let collapsed = PhaseGrid::new(0.0, 5);
        assert!(collapsed.phase().iter().all(|&xi| xi == 0.0));
        assert_eq!(collapsed.step(), 0.0);
    }
}
