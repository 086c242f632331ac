//! Validation utilities for the dense matrix format
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical operations on data layout and format
//! constraints, plus text parsing for Matrix Market input.

pub mod bounds;
pub mod parsing;

pub use bounds::{element_count, payload_len};
pub use parsing::{parse_banner, parse_entry, parse_size_line, MarketBanner, MarketField, MarketSymmetry};
