//! Matrix Market text import
//!
//! Reads the coordinate Matrix Market format into a dense matrix:
//! banner, `%` comment lines, a `rows cols entries` size line, then
//! 1-based coordinate entries. Symmetric files mirror each entry across
//! the diagonal; pattern files store 1 at each listed position. Missing
//! positions are zero-filled. The line-level parsing lives in
//! `matfile_core::validation::parsing`; this module drives it over a
//! buffered reader and materializes the result.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use matfile_core::{parse_banner, parse_entry, parse_size_line};
use matfile_core::{Element, FormatError, MarketBanner, MarketSymmetry};

use crate::dense::DenseMatrix;
use crate::error::{Error, Result};

/// Read the shape declared by a Matrix Market file without loading entries
pub fn load_market_size<P: AsRef<Path>>(path: P) -> Result<(u64, u64)> {
    let file = File::open(path)?;
    let mut lines = LineReader::new(file);

    let (line_no, size_line) = lines.next_content_line()?;
    let (rows, cols, _) = parse_size_line(&size_line).map_err(|source| Error::Parse {
        line: line_no,
        source,
    })?;
    Ok((rows, cols))
}

/// Load a Matrix Market file into a dense matrix
///
/// Entry values are converted to `T` through its f64 widening, matching
/// how callers fill matrices from text sources.
pub fn load_market<T: Element, P: AsRef<Path>>(path: P) -> Result<DenseMatrix<T>> {
    let file = File::open(path)?;
    let mut lines = LineReader::new(file);

    let (banner_no, banner_line) = lines
        .next_raw_line()?
        .ok_or(Error::Parse {
            line: 1,
            source: FormatError::InvalidBanner,
        })?;
    let banner = parse_banner(&banner_line).map_err(|source| Error::Parse {
        line: banner_no,
        source,
    })?;

    let (size_no, size_line) = lines.next_content_line()?;
    let (rows, cols, entries) = parse_size_line(&size_line).map_err(|source| Error::Parse {
        line: size_no,
        source,
    })?;
    if banner.symmetry == MarketSymmetry::Symmetric && rows != cols {
        return Err(Error::Parse {
            line: size_no,
            source: FormatError::InvalidEntry,
        });
    }

    let rows = usize::try_from(rows).map_err(|_| Error::Format(FormatError::InvalidShape))?;
    let cols = usize::try_from(cols).map_err(|_| Error::Format(FormatError::InvalidShape))?;
    let mut matrix = DenseMatrix::<T>::zeros(rows, cols)?;

    let mut seen = 0u64;
    while seen < entries {
        let (line_no, line) = match lines.next_raw_line()? {
            Some(line) => line,
            None => {
                // Fewer entries than the size line declared
                return Err(Error::Parse {
                    line: lines.current_line(),
                    source: FormatError::InvalidEntry,
                });
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        store_entry(&mut matrix, &banner, trimmed).map_err(|source| Error::Parse {
            line: line_no,
            source,
        })?;
        seen += 1;
    }

    Ok(matrix)
}

fn store_entry<T: Element>(
    matrix: &mut DenseMatrix<T>,
    banner: &MarketBanner,
    line: &str,
) -> std::result::Result<(), FormatError> {
    let (row, col, value) = parse_entry(line, banner.field)?;
    if row == 0 || col == 0 {
        return Err(FormatError::InvalidEntry);
    }
    let row = row as usize - 1;
    let col = col as usize - 1;
    if row >= matrix.rows() || col >= matrix.cols() {
        return Err(FormatError::InvalidEntry);
    }

    let value = T::from_f64(value);
    matrix
        .set(row, col, value)
        .map_err(|_| FormatError::InvalidEntry)?;
    if banner.symmetry == MarketSymmetry::Symmetric && row != col {
        matrix
            .set(col, row, value)
            .map_err(|_| FormatError::InvalidEntry)?;
    }
    Ok(())
}

/// Line iterator that tracks 1-based line numbers
struct LineReader {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl LineReader {
    fn new(file: File) -> Self {
        Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        }
    }

    fn current_line(&self) -> usize {
        self.line_no
    }

    fn next_raw_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line?)))
            }
            None => Ok(None),
        }
    }

    /// Next line that is neither blank nor a `%` comment
    fn next_content_line(&mut self) -> Result<(usize, String)> {
        loop {
            match self.next_raw_line()? {
                Some((no, line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('%') {
                        continue;
                    }
                    return Ok((no, line));
                }
                None => {
                    return Err(Error::Parse {
                        line: self.line_no,
                        source: FormatError::InvalidEntry,
                    })
                }
            }
        }
    }
}
