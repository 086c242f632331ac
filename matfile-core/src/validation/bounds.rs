//! Payload size validation for the dense matrix format
//!
//! This module provides pure mathematical validation functions for
//! payload layout calculations with no I/O dependencies.

use crate::error::FormatError;
use crate::format::DataType;

/// Compute the payload length in bytes for a matrix shape
///
/// Returns `rows * cols * element width` with overflow protection. A shape
/// whose payload cannot be represented in 64 bits fails with
/// [`FormatError::InvalidShape`] instead of wrapping.
pub const fn payload_len(rows: u64, cols: u64, data_type: DataType) -> Result<u64, FormatError> {
    let count = match rows.checked_mul(cols) {
        Some(count) => count,
        None => return Err(FormatError::InvalidShape),
    };

    match count.checked_mul(data_type.size_bytes() as u64) {
        Some(len) => Ok(len),
        None => Err(FormatError::InvalidShape),
    }
}

/// Compute the element count stored in a payload of the given byte length
///
/// Fails with [`FormatError::SizeMismatch`] when the byte length is not a
/// multiple of the element width.
pub const fn element_count(byte_len: u64, data_type: DataType) -> Result<u64, FormatError> {
    let element_size = data_type.size_bytes() as u64;

    if byte_len % element_size != 0 {
        return Err(FormatError::SizeMismatch);
    }

    Ok(byte_len / element_size)
}
