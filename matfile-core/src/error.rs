//! Error types for dense matrix format operations

use crate::format::DataType;

/// Errors that can occur while encoding or decoding the dense matrix format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Leading magic bytes do not identify a matrix file
    BadMagic,
    /// Format version is newer than this library supports
    UnsupportedVersion,
    /// Data type tag byte does not match any defined type
    UnknownDataType,
    /// Matrix kind byte does not match any defined kind
    UnknownMatrixKind,
    /// Fewer bytes available than the format declares
    Truncated,
    /// Dimensions overflow the header fields or the payload size calculation
    InvalidShape,
    /// Payload length disagrees with the declared shape and element width
    SizeMismatch,
    /// Stored element type differs from the requested one
    TypeMismatch {
        /// Element type the caller asked for
        expected: DataType,
        /// Element type recorded in the file header
        found: DataType,
    },
    /// Matrix Market banner line is missing or unsupported
    InvalidBanner,
    /// Matrix Market size or coordinate line could not be parsed
    InvalidEntry,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::BadMagic => write!(f, "Invalid matrix file magic"),
            FormatError::UnsupportedVersion => write!(f, "Unsupported format version"),
            FormatError::UnknownDataType => write!(f, "Unknown data type tag"),
            FormatError::UnknownMatrixKind => write!(f, "Unknown matrix kind"),
            FormatError::Truncated => write!(f, "File is shorter than declared"),
            FormatError::InvalidShape => write!(f, "Matrix shape overflows the format limits"),
            FormatError::SizeMismatch => {
                write!(f, "Payload length disagrees with the declared shape")
            }
            FormatError::TypeMismatch { expected, found } => {
                write!(f, "Element type mismatch: expected {expected}, found {found}")
            }
            FormatError::InvalidBanner => write!(f, "Unsupported Matrix Market banner"),
            FormatError::InvalidEntry => write!(f, "Malformed Matrix Market entry"),
        }
    }
}

/// Result type for format-level operations
pub type Result<T> = core::result::Result<T, FormatError>;
