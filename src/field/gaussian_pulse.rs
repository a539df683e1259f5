use std::f64::consts;
use ndarray::prelude::*;

use crate::special_functions::Erf;
use super::PhaseGrid;

/// A linearly polarized plane-wave pulse with a gaussian
/// temporal envelope, in normalized units: the phase is measured
/// in units of 1/ω0, so that one wavelength is 2π.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianPulse {
    a0: f64,
    tau: f64,
    xi0: f64,
}

/// The envelope and the full waveform of a pulse, sampled on a [PhaseGrid]
#[derive(Debug, Clone)]
pub struct FieldSample {
    pub envelope: Array1<f64>,
    pub waveform: Array1<f64>,
}

impl GaussianPulse {
    /// Pulse with peak amplitude `a0` and duration `tau`, centred on zero phase
    pub fn new(a0: f64, tau: f64) -> Self {
        GaussianPulse {
            a0,
            tau,
            xi0: 0.0,
        }
    }

    /// Moves the peak of the envelope to phase `xi0`
    pub fn centred_at(self, xi0: f64) -> Self {
        GaussianPulse {
            xi0,
            ..self
        }
    }

    pub fn a0(&self) -> f64 {
        self.a0
    }

    pub fn duration(&self) -> f64 {
        self.tau
    }

    pub fn centre(&self) -> f64 {
        self.xi0
    }

    /// The cycle-averaged amplitude a0 exp[-(ξ - ξ0)^2 / tau^2].
    /// Not finite if tau = 0.
    pub fn envelope(&self, phase: f64) -> f64 {
        let u = (phase - self.xi0) / self.tau;
        self.a0 * (-u * u).exp()
    }

    /// The normalized vector potential, i.e. the envelope modulating a sin(ξ) carrier
    pub fn waveform(&self, phase: f64) -> f64 {
        self.envelope(phase) * phase.sin()
    }

    /// Longitudinal displacement owing to the ponderomotive force,
    /// accumulated between ξ = +∞ and `phase`.
    pub fn drift(&self, phase: f64) -> f64 {
        let arg = consts::SQRT_2 * (phase - self.xi0) / self.tau;
        -0.125 * consts::FRAC_PI_2.sqrt() * self.a0.powi(2) * self.tau * (arg.erf() - 1.0)
    }

    /// Change in the drift across the entire pulse, z(+∞) - z(-∞)
    pub fn net_drift(&self) -> f64 {
        -0.25 * consts::FRAC_PI_2.sqrt() * self.a0.powi(2) * self.tau
    }

    /// Evaluates the envelope and waveform at every point of `grid`
    pub fn sample(&self, grid: &PhaseGrid) -> FieldSample {
        let phase = grid.phase();
        let envelope = phase.mapv(|xi| self.envelope(xi));
        let waveform = phase.mapv(|xi| self.waveform(xi));
        FieldSample {
            envelope,
            waveform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        let pulse = GaussianPulse::new(4.0, 10.0 * consts::PI).centred_at(3.0);
        assert_eq!(pulse.envelope(3.0), 4.0);
        let width = pulse.envelope(3.0 + pulse.duration()) / pulse.a0();
        assert!((width - (-1.0f64).exp()).abs() < 1.0e-15);
        assert_eq!(pulse.envelope(3.0 + 2.0), pulse.envelope(3.0 - 2.0));
        assert!(pulse.envelope(3.0 + 40.0 * consts::PI) < 1.0e-6);
    }

    #[test]
    fn sampled_field() {
        let pulse = GaussianPulse::new(2.5, 6.0 * consts::PI);
        let grid = PhaseGrid::new(pulse.duration(), 1001);
        let field = pulse.sample(&grid);

        assert_eq!(field.envelope.len(), 1001);
        assert_eq!(field.waveform.len(), 1001);

        for (i, &xi) in grid.phase().iter().enumerate() {
            assert_eq!(field.envelope[i], pulse.envelope(xi));
            assert_eq!(field.waveform[i], pulse.waveform(xi));
            assert!(field.waveform[i].abs() <= field.envelope[i]);
        }
    }

    #[test]
    fn drift_limits() {
        let pulse = GaussianPulse::new(4.0, 10.0 * consts::PI);
        let ahead = pulse.drift(f64::INFINITY);
        let behind = pulse.drift(f64::NEG_INFINITY);
        println!("drift: ahead = {:.6e}, behind = {:.6e}, net = {:.6e}", ahead, behind, pulse.net_drift());
        assert_eq!(ahead, 0.0);
        assert!((ahead - behind - pulse.net_drift()).abs() < 1.0e-12 * behind);
        assert!((pulse.drift(0.0) - 0.5 * behind).abs() < 1.0e-12 * behind);
    }

    #[test]
    fn zero_duration() {
        let pulse = GaussianPulse::new(1.0, 0.0);
        assert!(pulse.envelope(0.0).is_nan());
        assert!(pulse.waveform(0.0).is_nan());
        assert!(pulse.drift(0.0).is_nan());
    }
}
