//! Error types for sum-of-products expression parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Failure to parse sum-of-products text
///
/// This error type is returned by `Sop::parse()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSopError {
    /// The text is not a valid sum of products over `A`, `B` and `C`
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error was detected, when known
        position: Option<usize>,
    },
}

impl fmt::Display for ParseSopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSopError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
        }
    }
}

impl std::error::Error for ParseSopError {}

impl From<ParseSopError> for io::Error {
    fn from(err: ParseSopError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
