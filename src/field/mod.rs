//! Representation of the laser pulse, as a function of the co-moving
//! phase ξ = z - t

mod grid;
mod gaussian_pulse;

pub use self::grid::*;
pub use self::gaussian_pulse::*;
