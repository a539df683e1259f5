//! YAML-readable types

use std::convert::TryFrom;
use std::path::PathBuf;
use yaml_rust::yaml::Yaml;
use evalexpr::{HashMapContext, eval_number_with_context};

/// Types that can be parsed from a YML-formatted file
pub trait FromYaml: Sized {
    /// Attempt to parse the YML field as the specified type, using the supplied Context for named variables and constants.
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()>;
}

impl FromYaml for String {
    fn from_yaml(arg: Yaml, _ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::String(s) | Yaml::Real(s) => Ok(s),
            Yaml::Integer(i) => Ok(i.to_string()),
            _ => Err(())
        }
    }
}

impl FromYaml for PathBuf {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        let s: String = FromYaml::from_yaml(arg, ctx)?;
        if s.is_empty() {
            Err(())
        } else {
            Ok(PathBuf::from(s))
        }
    }
}

/// Numbers may be given as literals or as expressions, e.g. `2.0 * pi`
impl FromYaml for f64 {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Real(s) => s.parse::<f64>().or(Err(())),
            Yaml::Integer(i) => Ok(i as f64),
            Yaml::String(s) => eval_number_with_context(&s, ctx).or(Err(())),
            _ => Err(())
        }
    }
}

/// Counts may be given as expressions, e.g. `2^14`, or as reals, e.g.
/// `1.0e4`, as long as they are non-negative whole numbers
impl FromYaml for usize {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        let n = match arg {
            Yaml::Integer(i) => return usize::try_from(i).or(Err(())),
            Yaml::Real(s) => s.parse::<f64>().or(Err(()))?,
            Yaml::String(s) => eval_number_with_context(&s, ctx).or(Err(()))?,
            _ => return Err(())
        };

        if n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
            Ok(n as usize)
        } else {
            Err(())
        }
    }
}

/// A single count is read as a list of length 1
impl FromYaml for Vec<usize> {
    fn from_yaml(arg: Yaml, ctx: &HashMapContext) -> Result<Self, ()> {
        match arg {
            Yaml::Array(array) => {
                if array.is_empty() {
                    return Err(());
                }
                array.into_iter()
                    .map(|y| FromYaml::from_yaml(y, ctx))
                    .collect()
            },
            other => {
                let n: usize = FromYaml::from_yaml(other, ctx)?;
                Ok(vec![n])
            },
        }
    }
}
