//! Owned dense matrix container
//!
//! Elements are stored in row-major order, matching the on-disk payload
//! layout. The container owns its storage; save and load operations copy
//! into and out of it and never retain a reference across calls.

use matfile_core::{Element, FormatError};

use crate::error::{Error, Result};

/// Dense row-major matrix with owned storage
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseMatrix<T: Element> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> DenseMatrix<T> {
    /// Build a matrix from a row-major element vector
    ///
    /// Fails with [`FormatError::InvalidShape`] when `data.len()` does not
    /// equal `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Self { data, rows, cols }),
            _ => Err(Error::Format(FormatError::InvalidShape)),
        }
    }

    /// Build a matrix with every element set to zero
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::Format(FormatError::InvalidShape))?;
        Ok(Self {
            data: vec![T::zeroed(); len],
            rows,
            cols,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Set the element at `(row, col)`
    ///
    /// Fails with [`FormatError::InvalidShape`] when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            Ok(())
        } else {
            Err(Error::Format(FormatError::InvalidShape))
        }
    }

    /// Row-major element slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major element vector
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Widen every element to f64
    pub fn widen_to_f64(&self) -> DenseMatrix<f64> {
        DenseMatrix {
            data: self.data.iter().map(|v| v.to_f64()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Write the matrix in the `+d.ddde.. ` fixed layout, one line per row
    pub fn write_pretty<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let v = self.data[row * self.cols + col].to_f64();
                write!(writer, "{v:+.3e} ")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl<T: Element> std::ops::Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_shape_check() {
        let m = DenseMatrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(2, 0)], 5.0);

        assert!(DenseMatrix::from_vec(vec![1.0_f64; 5], 3, 2).is_err());
    }

    #[test]
    fn test_zeros_and_set() {
        let mut m = DenseMatrix::<i32>::zeros(2, 2).unwrap();
        assert_eq!(m.as_slice(), &[0, 0, 0, 0]);

        m.set(1, 0, -5).unwrap();
        assert_eq!(m[(1, 0)], -5);
        assert!(m.set(2, 0, 1).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = DenseMatrix::from_vec(vec![1_u8, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(m.get(0, 0), Some(&1));
        assert_eq!(m.get(1, 1), Some(&4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_empty_matrix() {
        let m = DenseMatrix::<f32>::from_vec(Vec::new(), 0, 10).unwrap();
        assert_eq!(m.shape(), (0, 10));
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn test_widen_to_f64() {
        let m = DenseMatrix::from_vec(vec![1_i16, -2, 3, -4], 2, 2).unwrap();
        let wide = m.widen_to_f64();
        assert_eq!(wide.as_slice(), &[1.0, -2.0, 3.0, -4.0]);
        assert_eq!(wide.shape(), (2, 2));
    }

    #[test]
    fn test_write_pretty_layout() {
        let m = DenseMatrix::from_vec(vec![1.0_f64, -2.0], 1, 2).unwrap();
        let mut out = Vec::new();
        m.write_pretty(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('+'));
        assert!(text.contains("-2.000e0"));
        assert_eq!(text.lines().count(), 1);
    }
}
