//! Error types for the Karnaugh map simplifier
//!
//! Simplification itself cannot fail: every mask in `0..=255` has a result. The
//! errors here belong to the input sources and file formats around it.

use std::fmt;
use std::io;
use std::sync::Arc;

pub use crate::pla::error::PLAError;
pub use crate::sop::error::ParseSopError;

/// A malformed minterm token rejected by strict input parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The token is not a decimal integer
    NotANumber {
        /// The offending token
        token: Arc<str>,
        /// Zero-based token position within the line
        position: usize,
    },
    /// The token is an integer outside `0..=7`
    OutOfRange {
        /// The parsed value
        value: i64,
        /// Zero-based token position within the line
        position: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber { token, position } => write!(
                f,
                "Token {} ('{}') is not a minterm number",
                position, token
            ),
            InputError::OutOfRange { value, position } => write!(
                f,
                "Token {} is minterm {}, expected a value in 0..=7",
                position, value
            ),
        }
    }
}

impl std::error::Error for InputError {}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// The main error type for the crate
///
/// Wraps the per-concern error types so callers combining several input sources
/// can use one `Result` type.
#[derive(Debug)]
pub enum KmapError {
    /// Rejected minterm input
    Input(InputError),
    /// Unparseable sum-of-products text
    Parse(ParseSopError),
    /// Malformed PLA data
    PLA(PLAError),
    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::Input(e) => write!(f, "{}", e),
            KmapError::Parse(e) => write!(f, "{}", e),
            KmapError::PLA(e) => write!(f, "PLA format error: {}", e),
            KmapError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Input(e) => Some(e),
            KmapError::Parse(e) => Some(e),
            KmapError::PLA(e) => Some(e),
            KmapError::Io(e) => Some(e),
        }
    }
}

impl From<InputError> for KmapError {
    fn from(err: InputError) -> Self {
        KmapError::Input(err)
    }
}

impl From<ParseSopError> for KmapError {
    fn from(err: ParseSopError) -> Self {
        KmapError::Parse(err)
    }
}

impl From<PLAError> for KmapError {
    fn from(err: PLAError) -> Self {
        KmapError::PLA(err)
    }
}

impl From<io::Error> for KmapError {
    fn from(err: io::Error) -> Self {
        KmapError::Io(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::Io(io_err) => io_err,
            other => io::Error::other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_a_number_display() {
        let err = InputError::NotANumber {
            token: Arc::from("x"),
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Token 2"));
        assert!(msg.contains("'x'"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = InputError::OutOfRange {
            value: 9,
            position: 0,
        };
        assert!(err.to_string().contains("minterm 9"));
    }

    #[test]
    fn test_input_error_to_io_error() {
        let err = InputError::OutOfRange {
            value: -1,
            position: 1,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_pla_error_converts() {
        let err: KmapError = PLAError::MissingDirective { directive: ".i" }.into();
        assert!(matches!(err, KmapError::PLA(PLAError::MissingDirective { .. })));
        assert!(err.to_string().starts_with("PLA format error: "));

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_error_trait_source() {
        let err = KmapError::Input(InputError::OutOfRange {
            value: 8,
            position: 0,
        });
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kmap_error_to_io_error_preserves_io_error() {
        let original = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = KmapError::Io(original);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let err = KmapError::Input(InputError::OutOfRange {
            value: 8,
            position: 0,
        });
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
