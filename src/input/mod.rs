//! Parse input configuration file

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

mod error;
mod types;
mod setup;

pub use error::*;
pub use types::*;
pub use setup::*;

/// Represents the input configuration, which defines values
/// for the pulse and grid parameters, and any automatic values
/// for those parameters.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| InputError::file_named(&path.display().to_string()))?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|_| InputError::file())?;
        let input = input.first()
            .ok_or(InputError::file())?;

        Ok(Config {
            input: input.clone(),
            ctx: HashMapContext::new(),
        })
    }

    /// Loads automatic values for constants and special functions.
    /// Also loads and evaluates mathematical expressions
    /// that are given in the specified `section`.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        // phase is measured in units of 1/omega, so one
        // wavelength (or period) is 2 pi
        let mut ctx = context_map! {
            "pi" => std::f64::consts::PI,
            "wavelength" => 2.0 * std::f64::consts::PI,
            "period" => 2.0 * std::f64::consts::PI,
            "degree" => std::f64::consts::PI / 180.0,
        }.unwrap();

        context_function!(ctx, "sqrt",   f64::sqrt);
        context_function!(ctx, "abs",    f64::abs);
        context_function!(ctx, "exp",    f64::exp);
        context_function!(ctx, "ln",     f64::ln);
        context_function!(ctx, "sin",    f64::sin);
        context_function!(ctx, "cos",    f64::cos);
        context_function!(ctx, "tan",    f64::tan);
        context_function!(ctx, "floor",  f64::floor);
        context_function!(ctx, "ceil",   f64::ceil);
        context_function!(ctx, "round",  f64::round);

        // gaussian duration whose intensity profile has the given full width at half maximum
        context_function!(ctx, "fwhm", |t: f64| t / (2.0 * std::f64::consts::LN_2).sqrt());

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        if self.input[section].is_badvalue() {
            return Ok(self);
        }

        let entries = self.input[section].as_hash()
            .ok_or_else(|| InputError::conversion(section, section))?;

        for (a, b) in entries {
            // grab the value, if possible
            let (key, value) = match (a, b) {
                (Yaml::String(k), Yaml::Integer(i)) => (Some(k), Some(*i as f64)),
                (Yaml::String(k), Yaml::Real(s)) => (Some(k), s.parse::<f64>().ok()),
                (Yaml::String(k), Yaml::String(s)) => (Some(k), eval_number_with_context(s, &self.ctx).ok()),
                _ => (None, None),
            };

            // insert it into the context so it's available for the next read
            match (key, value) {
                (Some(k), Some(v)) => {
                    self.ctx.set_value(k.clone(), Value::from(v))
                        .map_err(|_| InputError::conversion(section, k))?
                },
                (Some(k), None) => {
                    // found a key, value pair but parsing failed
                    return Err(InputError::conversion(section, k));
                },
                _ => {},
            }
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let address: Vec<&str> = path.split(':').collect();
        let value = address.iter()
            .try_fold(&self.input, |y, s| {
                if y[*s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[*s])
                }
            })?;
        let field = address.last().copied().unwrap_or(path);
        T::from_yaml(value.clone(), &self.ctx)
            .map_err(|_| InputError::conversion(path, field))
    }

    /// Like `Config::read`, but falls back to `default` if the
    /// key-value pair is absent. A value that is present but cannot
    /// be parsed is still an error.
    pub fn read_or<T, S>(&self, path: S, default: T) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Err(e) if e.kind() == InputErrorKind::Location => Ok(default),
            result => result,
        }
    }

    /// Does the configuration contain the specified section?
    pub fn has_section(&self, section: &str) -> bool {
        !self.input[section].is_badvalue()
    }

    /// Parses a string argument and evaluates it using the loaded context, e.g.
    /// `"n * wavelength"`, where 'n' is specified in the constants block.
    #[allow(unused)]
    pub fn evaluate<S: AsRef<str>>(&self, arg: S) -> Option<f64> {
        eval_number_with_context(arg.as_ref(), &self.ctx).ok()
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).unwrap()
        };
    }

    pub(super) use context_function;
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use std::path::PathBuf;
    use super::*;

    #[test]
    fn config_parser() {
        let text = "---
        laser:
          a0: 4
          tau: n * wavelength
          centre: -0.5 * pi

        grid:
          points: 2^10
          extent: 3.5

        output:
          plot: out/figure.svg
          convergence: [1000, 2000, 4000]

        constants:
          n: 5
          half: n / 2.0

        deep:
          nested:
            key: fwhm(2.0 * sqrt(2.0 * ln(2.0)))
        ";

        let mut config = Config::from_string(&text).unwrap();
        config.with_context("constants").unwrap();

        // Implicit conversion from integer to f64
        let a0: f64 = config.read("laser:a0").unwrap();
        assert_eq!(a0, 4.0);

        // Evaluates math expr, using constants
        let tau: f64 = config.read("laser:tau").unwrap();
        assert_eq!(tau, 5.0 * 2.0 * consts::PI);

        let centre: f64 = config.read("laser:centre").unwrap();
        assert_eq!(centre, -0.5 * consts::PI);

        // usize from an expression
        let points: usize = config.read("grid:points").unwrap();
        assert_eq!(points, 1024);

        let plot: PathBuf = config.read("output:plot").unwrap();
        assert_eq!(plot, PathBuf::from("out/figure.svg"));

        let sizes: Vec<usize> = config.read("output:convergence").unwrap();
        assert_eq!(sizes, vec![1000, 2000, 4000]);

        let key: f64 = config.read("deep:nested:key").unwrap();
        assert!((key - 2.0).abs() < 1.0e-15);

        // evaluate arb string
        let val = config.evaluate("half + 1").unwrap();
        assert_eq!(val, 3.5);
    }

    #[test]
    fn missing_and_invalid() {
        let text = "---
        laser:
          a0: four
        grid:
          points: -3
        ";

        let mut config = Config::from_string(&text).unwrap();
        config.with_context("constants").unwrap();

        let a0: Result<f64, _> = config.read("laser:a0");
        assert_eq!(a0.unwrap_err().kind(), InputErrorKind::Conversion);

        let tau: Result<f64, _> = config.read("laser:tau");
        assert_eq!(tau.unwrap_err().kind(), InputErrorKind::Location);

        // defaults apply only to absent keys
        assert_eq!(config.read_or("laser:tau", 2.0).unwrap(), 2.0);
        assert!(config.read_or("laser:a0", 2.0).is_err());

        let points: Result<usize, _> = config.read("grid:points");
        assert!(points.is_err());

        assert!(config.has_section("grid"));
        assert!(!config.has_section("output"));
    }

    #[test]
    fn counts_as_reals() {
        let text = "---
        grid:
          points: 1.0e4
          fractional: 2.5
          negative: -1.0
        output:
          convergence: [1.0e3, 2^11, 4000]
        ";

        let config = Config::from_string(&text).unwrap();

        let points: usize = config.read("grid:points").unwrap();
        assert_eq!(points, 10_000);

        let sizes: Vec<usize> = config.read("output:convergence").unwrap();
        assert_eq!(sizes, vec![1000, 2048, 4000]);

        let fractional: Result<usize, _> = config.read("grid:fractional");
        assert_eq!(fractional.unwrap_err().kind(), InputErrorKind::Conversion);

        let negative: Result<usize, _> = config.read("grid:negative");
        assert_eq!(negative.unwrap_err().kind(), InputErrorKind::Conversion);
    }

    #[test]
    fn bad_constants() {
        let text = "---
        constants:
          x: 1.0 +
        ";
        let mut config = Config::from_string(&text).unwrap();
        let err = config.with_context("constants").err().unwrap();
        assert_eq!(err.kind(), InputErrorKind::Conversion);
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("pulse-drift-does-not-exist.yml");
        let err = Config::from_file(&path).err().unwrap();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::File);
    }
}
