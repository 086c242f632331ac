//! Error types for matrix file I/O

use matfile_core::FormatError;

/// Errors surfaced by file save/load operations
#[derive(Debug)]
pub enum Error {
    /// Open, read, or write failure at the OS boundary
    Io(std::io::Error),
    /// The file contents violate the binary format
    Format(FormatError),
    /// A Matrix Market text line could not be parsed
    Parse {
        /// 1-based line number within the input file
        line: usize,
        /// The underlying format fault
        source: FormatError,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Format(err) => write!(f, "{err}"),
            Error::Parse { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

/// Result type for file I/O operations
pub type Result<T> = std::result::Result<T, Error>;
