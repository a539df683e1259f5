//! Numerical and analytic trajectories of a particle overtaken by a pulse

use ndarray::prelude::*;

use crate::analytic::AnalyticSolution;
use crate::field::{FieldSample, GaussianPulse, PhaseGrid};
use crate::kinematics::Momenta;
use crate::quadrature;

/// Every quantity computed for one pulse on one grid. Arrays
/// share the length and indexing of `grid`.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub pulse: GaussianPulse,
    pub grid: PhaseGrid,
    pub field: FieldSample,
    pub momenta: Momenta,
    /// Transverse position, by quadrature of -px
    pub x: Array1<f64>,
    /// Longitudinal position, by quadrature of -pz
    pub z: Array1<f64>,
    pub analytic: AnalyticSolution,
}

/// Largest differences between the numerical and analytic positions
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Residuals {
    pub x: f64,
    pub z: f64,
}

impl Trajectory {
    pub fn compute(pulse: &GaussianPulse, grid: &PhaseGrid) -> Self {
        let field = pulse.sample(grid);
        let momenta = Momenta::from_waveform(field.waveform.view());
        let x = quadrature::displacement(momenta.px.view(), grid.step());
        let z = quadrature::displacement(momenta.pz.view(), grid.step());
        let analytic = AnalyticSolution::evaluate(pulse, grid);

        Trajectory {
            pulse: *pulse,
            grid: grid.clone(),
            field,
            momenta,
            x,
            z,
            analytic,
        }
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn residuals(&self) -> Residuals {
        Residuals {
            x: quadrature::max_abs_difference(self.x.view(), self.analytic.x.view()),
            z: quadrature::max_abs_difference(self.z.view(), self.analytic.z.view()),
        }
    }

    /// Peak Lorentz factor reached inside the pulse
    pub fn max_gamma(&self) -> f64 {
        self.momenta.gamma.fold(f64::NAN, |max, &g| max.max(g))
    }

    /// Are all of the computed quantities finite?
    pub fn is_finite(&self) -> bool {
        let arrays = [
            &self.field.envelope,
            &self.field.waveform,
            &self.momenta.px,
            &self.momenta.pz,
            &self.momenta.gamma,
            &self.x,
            &self.z,
            &self.analytic.x,
            &self.analytic.z,
            &self.analytic.drift,
        ];
        arrays.iter().all(|a| a.iter().all(|v| v.is_finite()))
    }

    /// Final transverse and longitudinal positions, numerical then analytic
    pub fn final_positions(&self) -> Option<([f64; 2], [f64; 2])> {
        let n = self.len().checked_sub(1)?;
        Some((
            [self.x[n], self.z[n]],
            [self.analytic.x[n], self.analytic.z[n]],
        ))
    }
}

/// Empirical order of convergence of the numerical x, from grids of
/// `n`, `2n - 1` and `4n - 3` points, i.e. doubling the number of intervals
pub fn convergence_order(pulse: &GaussianPulse, extent: f64, n: usize) -> Option<f64> {
    if n < 2 {
        return None;
    }

    let solve = |points: usize| {
        let grid = PhaseGrid::with_extent(pulse.duration(), extent, points);
        Trajectory::compute(pulse, &grid).x
    };

    let coarse = solve(n);
    let medium = solve(2 * n - 1);
    let fine = solve(4 * n - 3);

    quadrature::observed_order(coarse.view(), medium.view(), fine.view())
}
