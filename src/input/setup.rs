//! Run parameters, as read from the input configuration

use std::f64::consts;
use std::path::PathBuf;

use crate::field::{GaussianPulse, DEFAULT_EXTENT};
use super::{Config, InputError};

/// Everything needed to compute and present one trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub pulse: GaussianPulse,
    /// Number of points in the phase grid
    pub points: usize,
    /// Half-width of the phase grid, in units of the pulse duration
    pub extent: f64,
    /// Where the figure is written
    pub plot: PathBuf,
    /// Grid sizes at which the numerical and analytic solutions are compared
    pub convergence: Vec<usize>,
}

impl Default for Setup {
    /// a0 = 4 and tau = 10 pi, sampled at 10^4 points
    fn default() -> Self {
        Setup {
            pulse: GaussianPulse::new(4.0, 10.0 * consts::PI),
            points: 10_000,
            extent: DEFAULT_EXTENT,
            plot: PathBuf::from("output/trajectory.svg"),
            convergence: vec![],
        }
    }
}

impl Setup {
    /// Reads the run parameters from `config`, which should already
    /// have its context loaded.
    /// If the `laser` section is present, both `a0` and `tau` must be specified.
    /// All other keys are optional.
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        let default = Setup::default();

        let pulse = if config.has_section("laser") {
            let a0: f64 = config.read("laser:a0")?;
            let tau: f64 = config.read("laser:tau")?;
            if !tau.is_finite() {
                return Err(InputError::value("laser:tau", "must be finite"));
            }
            let xi0: f64 = config.read_or("laser:centre", 0.0)?;
            GaussianPulse::new(a0, tau).centred_at(xi0)
        } else {
            default.pulse
        };

        let points: usize = config.read_or("grid:points", default.points)?;
        if points < 2 {
            return Err(InputError::value("grid:points", "at least two points are required"));
        }

        let extent: f64 = config.read_or("grid:extent", default.extent)?;
        if !(extent > 0.0 && extent.is_finite()) {
            return Err(InputError::value("grid:extent", "must be positive and finite"));
        }

        let plot: PathBuf = config.read_or("output:plot", default.plot)?;

        let convergence: Vec<usize> = config.read_or("output:convergence", default.convergence)?;
        if convergence.iter().any(|&n| n < 2) {
            return Err(InputError::value("output:convergence", "every grid needs at least two points"));
        }

        Ok(Setup {
            pulse,
            points,
            extent,
            plot,
            convergence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputErrorKind;

    fn setup_from(text: &str) -> Result<Setup, InputError> {
        let mut config = Config::from_string(text)?;
        config.with_context("constants")?;
        Setup::from_config(&config)
    }

    #[test]
    fn defaults() {
        let setup = setup_from("---\nconstants:\n  x: 1.0\n").unwrap();
        assert_eq!(setup, Setup::default());
        assert_eq!(setup.pulse.a0(), 4.0);
        assert_eq!(setup.pulse.duration(), 10.0 * consts::PI);
        assert_eq!(setup.pulse.centre(), 0.0);
    }

    #[test]
    fn full() {
        let text = "---
        constants:
          cycles: 3
        laser:
          a0: 2.5
          tau: cycles * wavelength
          centre: pi
        grid:
          points: 5001
          extent: 5
        output:
          plot: scan.svg
          convergence: 1001
        ";
        let setup = setup_from(text).unwrap();
        assert_eq!(setup.pulse.a0(), 2.5);
        assert!((setup.pulse.duration() - 6.0 * consts::PI).abs() < 1.0e-12);
        assert_eq!(setup.pulse.centre(), consts::PI);
        assert_eq!(setup.points, 5001);
        assert_eq!(setup.extent, 5.0);
        assert_eq!(setup.plot, PathBuf::from("scan.svg"));
        assert_eq!(setup.convergence, vec![1001]);
    }

    #[test]
    fn incomplete_laser() {
        let err = setup_from("---\nlaser:\n  a0: 1.0\n").unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Location);
    }

    #[test]
    fn rejects_bad_grid() {
        let err = setup_from("---\ngrid:\n  points: 1\n").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Value);

        let err = setup_from("---\ngrid:\n  extent: -1.0\n").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Value);

        let err = setup_from("---\noutput:\n  convergence: [100, 0]\n").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Value);
    }

    #[test]
    fn rejects_infinite_duration() {
        let err = setup_from("---\nlaser:\n  a0: 1.0\n  tau: 1.0 / 0.0\n").unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Value);

        let err = setup_from("---\nlaser:\n  a0: 1.0\n  tau: 0.0 / 0.0\n").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Value);
    }

    #[test]
    fn zero_duration_is_accepted() {
        // the field is then non-finite, which is reported but not an error
        let setup = setup_from("---\nlaser:\n  a0: 1.0\n  tau: 0.0\n").unwrap();
        assert_eq!(setup.pulse.duration(), 0.0);
    }
}
