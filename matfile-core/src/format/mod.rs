//! Binary format definitions for the dense matrix file layout
//!
//! Pure data structure definitions for the wire format. No I/O operations,
//! only format specifications.

pub mod constants;
pub mod header;

pub use header::{DataType, FpWidth, MatHeader, MatrixKind};
