//! Custom error types for the parsing of RPSL text

use std::io;

use thiserror;

/// Error that occured when reading RPSL objects from a text source
#[derive(thiserror::Error, Debug)]
pub enum ObjectParseError {
    #[error("line {line} is not an attribute, comment, continuation or blank line: {raw:?}")]
    MalformedLine { line: usize, raw: String },
    #[error("could not read from the underlying text source")]
    Io(#[from] io::Error),
}

impl ObjectParseError {
    /// Create a new error of variant `MalformedLine`, based on the
    /// offending source line.
    pub(crate) fn malformed(line: usize, raw: impl Into<String>) -> ObjectParseError {
        ObjectParseError::MalformedLine {
            line,
            raw: raw.into(),
        }
    }

    /// True if this error was caused by the byte source rather than by
    /// the structure of the text itself.
    pub fn is_io(&self) -> bool {
        matches!(self, ObjectParseError::Io(_))
    }
}
