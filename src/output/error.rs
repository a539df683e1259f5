//! Output-related errors

use std::fmt;
use std::error::Error;

pub enum OutputError {
    /// The directory that should contain the output could not be created
    Directory(String),
    /// The figure could not be drawn or written, with the cause
    Draw(String, String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::Directory(s) => write!(f, "failed to create output directory '{}'", s),
            OutputError::Draw(s, cause) => write!(f, "failed to write figure to '{}' because {}", s, cause),
        }
    }
}

impl fmt::Debug for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for OutputError {}

impl OutputError {
    pub fn draw(path: &str, cause: &dyn Error) -> Self {
        Self::Draw(path.to_owned(), cause.to_string())
    }
}
