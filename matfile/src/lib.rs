//! matfile - Dense Matrix File I/O
//!
//! This library stores dense numeric matrices in a compact binary format:
//! a fixed 56-byte header (magic, version, element type tag, matrix kind,
//! shape) followed by the elements in row-major order, little-endian, with
//! no padding. Ten element types are supported (8/16/32/64-bit signed and
//! unsigned integers, 32/64-bit IEEE floats) and every element round-trips
//! bit-for-bit.
//!
//! ## Architecture
//!
//! The format follows a clean specification/implementation separation:
//!
//! - **matfile-core**: Pure format definitions, element trait, and
//!   validation (no I/O)
//! - **matfile**: Concrete file operations, containers, and text import
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matfile::{DenseMatrix, FpWidth};
//!
//! fn example() -> matfile::Result<()> {
//!     let matrix = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2)?;
//!     matfile::save_dense(&matrix, "example.matrix")?;
//!
//!     // Probe the stored float width from the header alone
//!     assert_eq!(matfile::fp_width("example.matrix")?, FpWidth::Fp64);
//!
//!     // Load without knowing the stored type up front
//!     let loaded = matfile::load_dense("example.matrix")?;
//!     println!("{} x {} {}", loaded.rows(), loaded.cols(), loaded.data_type());
//!     Ok(())
//! }
//! ```

// Re-export core format definitions
pub use matfile_core::{
    // Format definitions
    DataType, FpWidth, MatHeader, MatrixKind,
    // Element abstraction
    Element,
    // Error handling
    FormatError,
    // Matrix Market parsing
    MarketBanner, MarketField, MarketSymmetry,
};

pub mod dense;
pub mod dynamic;
pub mod error;
pub mod file_io;
pub mod market;

pub use dense::DenseMatrix;
pub use dynamic::DynamicMatrix;
pub use error::{Error, Result};
pub use file_io::{
    fp_width, load_dense, load_dense_as, load_dense_fp32, load_dense_fp64, load_dtype,
    load_header, load_size, save_dense, save_dense_fp64,
};
pub use market::{load_market, load_market_size};
