//! Parsing utilities for Matrix Market text input
//!
//! This module provides pure parsing functions for the Matrix Market
//! header and coordinate lines with no I/O dependencies. The `matfile`
//! crate drives these over a buffered reader.

use crate::error::FormatError;

/// Symmetry declared by a Matrix Market banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketSymmetry {
    /// Every entry is stored explicitly
    General,
    /// Entries in the lower triangle are mirrored across the diagonal
    Symmetric,
}

/// Value field declared by a Matrix Market banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketField {
    /// Coordinate lines carry an explicit value
    Real,
    /// Coordinate lines carry positions only; stored values are 1
    Pattern,
}

/// Parsed Matrix Market banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketBanner {
    pub symmetry: MarketSymmetry,
    pub field: MarketField,
}

/// Parse the banner line of a Matrix Market file
///
/// Accepts `%%MatrixMarket matrix coordinate <field> <symmetry>` with the
/// `real`/`pattern` fields and `general`/`symmetric` symmetries. Anything
/// else fails with [`FormatError::InvalidBanner`].
pub fn parse_banner(line: &str) -> Result<MarketBanner, FormatError> {
    if !line.starts_with("%%MatrixMarket") {
        return Err(FormatError::InvalidBanner);
    }

    let mut symmetry = None;
    let mut field = None;
    for token in line.split_whitespace() {
        match token {
            "general" => symmetry = Some(MarketSymmetry::General),
            "symmetric" => symmetry = Some(MarketSymmetry::Symmetric),
            "real" => field = Some(MarketField::Real),
            "pattern" => field = Some(MarketField::Pattern),
            _ => {}
        }
    }

    match (symmetry, field) {
        (Some(symmetry), Some(field)) => Ok(MarketBanner { symmetry, field }),
        _ => Err(FormatError::InvalidBanner),
    }
}

/// Parse the size line: `rows cols entries`
pub fn parse_size_line(line: &str) -> Result<(u64, u64, u64), FormatError> {
    let mut fields = line.split_whitespace();

    let rows = parse_u64(fields.next())?;
    let cols = parse_u64(fields.next())?;
    let entries = parse_u64(fields.next())?;

    if fields.next().is_some() {
        return Err(FormatError::InvalidEntry);
    }

    Ok((rows, cols, entries))
}

/// Parse a coordinate line as `(row, col, value)`, all indices 1-based
///
/// Real entries carry `row col value`; pattern entries carry `row col`
/// and report a value of 1.
pub fn parse_entry(line: &str, field: MarketField) -> Result<(u64, u64, f64), FormatError> {
    let mut fields = line.split_whitespace();

    let row = parse_u64(fields.next())?;
    let col = parse_u64(fields.next())?;
    let value = match field {
        MarketField::Real => fields
            .next()
            .ok_or(FormatError::InvalidEntry)?
            .parse::<f64>()
            .map_err(|_| FormatError::InvalidEntry)?,
        MarketField::Pattern => 1.0,
    };

    if fields.next().is_some() {
        return Err(FormatError::InvalidEntry);
    }

    Ok((row, col, value))
}

fn parse_u64(field: Option<&str>) -> Result<u64, FormatError> {
    field
        .ok_or(FormatError::InvalidEntry)?
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidEntry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_banner() {
        let banner = parse_banner("%%MatrixMarket matrix coordinate real general").unwrap();
        assert_eq!(banner.symmetry, MarketSymmetry::General);
        assert_eq!(banner.field, MarketField::Real);

        let banner = parse_banner("%%MatrixMarket matrix coordinate pattern symmetric").unwrap();
        assert_eq!(banner.symmetry, MarketSymmetry::Symmetric);
        assert_eq!(banner.field, MarketField::Pattern);
    }

    #[test]
    fn test_parse_banner_rejects_unsupported() {
        assert_eq!(parse_banner(""), Err(FormatError::InvalidBanner));
        assert_eq!(
            parse_banner("% not a banner"),
            Err(FormatError::InvalidBanner)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate complex general"),
            Err(FormatError::InvalidBanner)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate real hermitian"),
            Err(FormatError::InvalidBanner)
        );
    }

    #[test]
    fn test_parse_size_line() {
        assert_eq!(parse_size_line("3 2 5"), Ok((3, 2, 5)));
        assert_eq!(parse_size_line("  10   10   0 "), Ok((10, 10, 0)));

        assert_eq!(parse_size_line(""), Err(FormatError::InvalidEntry));
        assert_eq!(parse_size_line("3 2"), Err(FormatError::InvalidEntry));
        assert_eq!(parse_size_line("3 2 5 7"), Err(FormatError::InvalidEntry));
        assert_eq!(parse_size_line("3 -2 5"), Err(FormatError::InvalidEntry));
    }

    #[test]
    fn test_parse_entry_real() {
        assert_eq!(
            parse_entry("1 2 -3.5", MarketField::Real),
            Ok((1, 2, -3.5))
        );
        assert_eq!(
            parse_entry("4 4 1e-3", MarketField::Real),
            Ok((4, 4, 1e-3))
        );

        assert_eq!(
            parse_entry("1 2", MarketField::Real),
            Err(FormatError::InvalidEntry)
        );
        assert_eq!(
            parse_entry("1 2 x", MarketField::Real),
            Err(FormatError::InvalidEntry)
        );
    }

    #[test]
    fn test_parse_entry_pattern() {
        assert_eq!(parse_entry("3 1", MarketField::Pattern), Ok((3, 1, 1.0)));

        assert_eq!(
            parse_entry("3 1 2.0", MarketField::Pattern),
            Err(FormatError::InvalidEntry)
        );
        assert_eq!(
            parse_entry("3", MarketField::Pattern),
            Err(FormatError::InvalidEntry)
        );
    }
}
