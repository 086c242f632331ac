//! Type-erased dense matrix
//!
//! [`DynamicMatrix`] holds one variant per supported element type so a
//! file can be loaded without knowing its stored type up front. The
//! element type of the variant is exactly the stored type; nothing is
//! promoted on load.

use matfile_core::{DataType, Element, FormatError};

use crate::dense::DenseMatrix;
use crate::error::Error;

macro_rules! for_each_variant {
    ($value:expr, $m:ident => $body:expr) => {
        match $value {
            DynamicMatrix::F32($m) => $body,
            DynamicMatrix::F64($m) => $body,
            DynamicMatrix::I8($m) => $body,
            DynamicMatrix::I16($m) => $body,
            DynamicMatrix::I32($m) => $body,
            DynamicMatrix::I64($m) => $body,
            DynamicMatrix::U8($m) => $body,
            DynamicMatrix::U16($m) => $body,
            DynamicMatrix::U32($m) => $body,
            DynamicMatrix::U64($m) => $body,
        }
    };
}

/// Dense matrix tagged with its stored element type
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicMatrix {
    F32(DenseMatrix<f32>),
    F64(DenseMatrix<f64>),
    I8(DenseMatrix<i8>),
    I16(DenseMatrix<i16>),
    I32(DenseMatrix<i32>),
    I64(DenseMatrix<i64>),
    U8(DenseMatrix<u8>),
    U16(DenseMatrix<u16>),
    U32(DenseMatrix<u32>),
    U64(DenseMatrix<u64>),
}

impl DynamicMatrix {
    /// Number of rows
    pub fn rows(&self) -> usize {
        for_each_variant!(self, m => m.rows())
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        for_each_variant!(self, m => m.cols())
    }

    /// Shape as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        for_each_variant!(self, m => m.shape())
    }

    /// Stored element type
    pub fn data_type(&self) -> DataType {
        match self {
            DynamicMatrix::F32(_) => DataType::F32,
            DynamicMatrix::F64(_) => DataType::F64,
            DynamicMatrix::I8(_) => DataType::I8,
            DynamicMatrix::I16(_) => DataType::I16,
            DynamicMatrix::I32(_) => DataType::I32,
            DynamicMatrix::I64(_) => DataType::I64,
            DynamicMatrix::U8(_) => DataType::U8,
            DynamicMatrix::U16(_) => DataType::U16,
            DynamicMatrix::U32(_) => DataType::U32,
            DynamicMatrix::U64(_) => DataType::U64,
        }
    }

    /// Element at `(row, col)` widened to f64, or `None` when out of bounds
    pub fn get_f64(&self, row: usize, col: usize) -> Option<f64> {
        for_each_variant!(self, m => m.get(row, col).map(|v| v.to_f64()))
    }

    /// Copy of the matrix with every element widened to f64
    pub fn widen_to_f64(&self) -> DenseMatrix<f64> {
        for_each_variant!(self, m => m.widen_to_f64())
    }

    /// Write the matrix in the `+d.ddde.. ` fixed layout, one line per row
    pub fn write_pretty<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for_each_variant!(self, m => m.write_pretty(writer))
    }
}

macro_rules! impl_dynamic_conversions {
    ($ty:ty, $variant:ident) => {
        impl From<DenseMatrix<$ty>> for DynamicMatrix {
            fn from(matrix: DenseMatrix<$ty>) -> Self {
                DynamicMatrix::$variant(matrix)
            }
        }

        impl TryFrom<DynamicMatrix> for DenseMatrix<$ty> {
            type Error = Error;

            fn try_from(value: DynamicMatrix) -> Result<Self, Error> {
                match value {
                    DynamicMatrix::$variant(matrix) => Ok(matrix),
                    other => Err(Error::Format(FormatError::TypeMismatch {
                        expected: <$ty as Element>::data_type(),
                        found: other.data_type(),
                    })),
                }
            }
        }
    };
}

impl_dynamic_conversions!(f32, F32);
impl_dynamic_conversions!(f64, F64);
impl_dynamic_conversions!(i8, I8);
impl_dynamic_conversions!(i16, I16);
impl_dynamic_conversions!(i32, I32);
impl_dynamic_conversions!(i64, I64);
impl_dynamic_conversions!(u8, U8);
impl_dynamic_conversions!(u16, U16);
impl_dynamic_conversions!(u32, U32);
impl_dynamic_conversions!(u64, U64);
