#![no_std]

//! matfile-core - Dense Matrix File Format Definitions
//!
//! This crate provides the pure format layer for dense numeric matrix
//! files: the fixed-layout header, the element type tags, the element
//! trait, and validation helpers. No I/O lives here; the `matfile` crate
//! builds the file operations on top of these definitions.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
