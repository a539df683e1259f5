//! Closed-form trajectory in a gaussian plane-wave pulse, valid
//! when the envelope varies slowly compared to the carrier

use ndarray::prelude::*;
use ndarray::Zip;

use crate::field::{GaussianPulse, PhaseGrid};

/// Analytic transverse and longitudinal positions
#[derive(Debug, Clone)]
pub struct AnalyticSolution {
    /// a_(ξ) cos(ξ)
    pub x: Array1<f64>,
    /// Drift plus the oscillation at twice the laser frequency, a_(ξ)^2 sin(2ξ) / 8
    pub z: Array1<f64>,
    /// Cycle-averaged longitudinal displacement
    pub drift: Array1<f64>,
}

impl AnalyticSolution {
    pub fn evaluate(pulse: &GaussianPulse, grid: &PhaseGrid) -> Self {
        let phase = grid.phase();
        let envelope = phase.mapv(|xi| pulse.envelope(xi));

        let x = Zip::from(&envelope)
            .and(&phase)
            .map_collect(|&a, &xi| a * xi.cos());

        let drift = phase.mapv(|xi| pulse.drift(xi));

        let z = Zip::from(&drift)
            .and(&envelope)
            .and(&phase)
            .map_collect(|&d, &a, &xi| d + 0.125 * a.powi(2) * (2.0 * xi).sin());

        AnalyticSolution {
            x,
            z,
            drift,
        }
    }
}
