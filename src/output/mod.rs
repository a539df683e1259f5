//! Presents a computed trajectory, as a figure and as a
//! summary printed to the terminal

mod error;
mod plot;
mod report;

pub use error::*;
pub use plot::*;
pub use report::*;
