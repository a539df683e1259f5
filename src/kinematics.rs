//! Momentum of a particle in a plane wave, from conservation of
//! the canonical transverse momentum and of the light-front
//! momentum γ - pz

use ndarray::prelude::*;
use ndarray::Zip;

/// Normalized momenta and Lorentz factor, pointwise on the phase grid
#[derive(Debug, Clone)]
pub struct Momenta {
    /// Transverse momentum, equal to the normalized vector potential
    pub px: Array1<f64>,
    /// Longitudinal momentum, px^2 / 2
    pub pz: Array1<f64>,
    /// Lorentz factor, sqrt(1 + px^2 + pz^2)
    pub gamma: Array1<f64>,
}

impl Momenta {
    /// Momenta of a particle, initially at rest, that has been
    /// overtaken by a wave with normalized potential `a`
    pub fn from_waveform(a: ArrayView1<f64>) -> Self {
        let px = a.to_owned();
        let pz = px.mapv(|p| 0.5 * p.powi(2));
        let gamma = Zip::from(&px)
            .and(&pz)
            .map_collect(|&px, &pz| (1.0 + px.powi(2) + pz.powi(2)).sqrt());
        Momenta {
            px,
            pz,
            gamma,
        }
    }
}
