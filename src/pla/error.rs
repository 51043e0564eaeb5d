//! Ways a PLA document can fail to describe a three-input, one-output function

use std::fmt;
use std::io;
use std::sync::Arc;

/// A PLA document that cannot be read as a function of `A`, `B`, `C`
///
/// Line numbers are one-based and count every line of the document, comments
/// included. Columns are zero-based offsets into the cube with separators removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// `.i` or `.o` never appeared and no cube allowed it to be inferred
    MissingDirective {
        /// `".i"` or `".o"`
        directive: &'static str,
    },
    /// `.i` or `.o` is not followed by a count
    InvalidDirective {
        /// `".i"` or `".o"`
        directive: &'static str,
        /// Text found after the directive
        value: Arc<str>,
    },
    /// The document declares something other than 3 inputs and 1 output
    UnsupportedDimensions {
        inputs: usize,
        outputs: usize,
    },
    /// A cube whose width disagrees with the 3 inputs and 1 output
    CubeDimensionMismatch {
        line: usize,
        /// Input characters found on the line
        inputs: usize,
        /// Output characters found on the line
        outputs: usize,
    },
    /// A cube character outside the PLA alphabet
    InvalidCharacter {
        line: usize,
        column: usize,
        character: char,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingDirective { directive } => {
                write!(f, "no {} directive and no cube to infer it from", directive)
            }
            PLAError::InvalidDirective { directive, value } => {
                write!(f, "{} expects a count, found '{}'", directive, value)
            }
            PLAError::UnsupportedDimensions { inputs, outputs } => write!(
                f,
                "a Karnaugh map needs 3 inputs and 1 output, the PLA declares {} and {}",
                inputs, outputs
            ),
            PLAError::CubeDimensionMismatch {
                line,
                inputs,
                outputs,
            } => write!(
                f,
                "line {}: cube has {} input and {} output characters, expected 3 and 1",
                line, inputs, outputs
            ),
            PLAError::InvalidCharacter {
                line,
                column,
                character,
            } => write!(
                f,
                "line {}, column {}: '{}' is not a PLA cube character",
                line, column, character
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
