//! File header definitions for the dense matrix format
//!
//! On-disk layout (all multi-byte fields little-endian, no interior padding
//! beyond the single reserved byte at offset 7):
//!
//! | Offset | Size | Field        |
//! |--------|------|--------------|
//! | 0      | 4    | magic `MATF` |
//! | 4      | 1    | version      |
//! | 5      | 1    | data type    |
//! | 6      | 1    | matrix kind  |
//! | 7      | 1    | reserved     |
//! | 8      | 8    | rows         |
//! | 16     | 8    | cols         |
//! | 24     | 32   | reserved     |
//!
//! The payload follows immediately: `rows * cols` elements in row-major
//! order, each in its native byte width, little-endian, with no padding and
//! no trailing data.

use core::mem::size_of;

#[cfg(feature = "alloc")]
extern crate alloc;

use crate::error::FormatError;

/// Element types supported by the format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    /// 32-bit IEEE floating point
    F32 = 0,
    /// 64-bit IEEE floating point
    F64 = 1,
    /// 8-bit signed integer
    I8 = 2,
    /// 16-bit signed integer
    I16 = 3,
    /// 32-bit signed integer
    I32 = 4,
    /// 64-bit signed integer
    I64 = 5,
    /// 8-bit unsigned integer
    U8 = 6,
    /// 16-bit unsigned integer
    U16 = 7,
    /// 32-bit unsigned integer
    U32 = 8,
    /// 64-bit unsigned integer
    U64 = 9,
}

impl DataType {
    /// Convert from the on-disk tag byte
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(DataType::F32),
            1 => Some(DataType::F64),
            2 => Some(DataType::I8),
            3 => Some(DataType::I16),
            4 => Some(DataType::I32),
            5 => Some(DataType::I64),
            6 => Some(DataType::U8),
            7 => Some(DataType::U16),
            8 => Some(DataType::U32),
            9 => Some(DataType::U64),
            _ => None,
        }
    }

    /// Convert to the on-disk tag byte
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Element width in bytes
    pub const fn size_bytes(self) -> usize {
        match self {
            DataType::I8 | DataType::U8 => 1,
            DataType::I16 | DataType::U16 => 2,
            DataType::F32 | DataType::I32 | DataType::U32 => 4,
            DataType::F64 | DataType::I64 | DataType::U64 => 8,
        }
    }

    /// Floating-point width of this type, if it is a float type
    pub const fn float_width(self) -> FpWidth {
        match self {
            DataType::F32 => FpWidth::Fp32,
            DataType::F64 => FpWidth::Fp64,
            _ => FpWidth::NotFloat,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I8 => write!(f, "i8"),
            DataType::I16 => write!(f, "i16"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::U8 => write!(f, "u8"),
            DataType::U16 => write!(f, "u16"),
            DataType::U32 => write!(f, "u32"),
            DataType::U64 => write!(f, "u64"),
        }
    }
}

/// Stored floating-point width, as reported by the header-only probe
///
/// Integer files report [`FpWidth::NotFloat`] rather than defaulting to a
/// numeric width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FpWidth {
    /// Elements are 32-bit floats
    Fp32,
    /// Elements are 64-bit floats
    Fp64,
    /// Elements are not floating point
    NotFloat,
}

impl FpWidth {
    /// Bit width, if the stored type is floating point
    pub const fn bits(self) -> Option<u32> {
        match self {
            FpWidth::Fp32 => Some(32),
            FpWidth::Fp64 => Some(64),
            FpWidth::NotFloat => None,
        }
    }
}

impl core::fmt::Display for FpWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FpWidth::Fp32 => write!(f, "fp32"),
            FpWidth::Fp64 => write!(f, "fp64"),
            FpWidth::NotFloat => write!(f, "not-float"),
        }
    }
}

/// Matrix kinds representable in the header
///
/// Only dense matrices are defined; the byte exists so the format can grow
/// without a layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatrixKind {
    /// Dense row-major element stream
    Dense = 0,
}

impl MatrixKind {
    /// Convert from the on-disk kind byte
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(MatrixKind::Dense),
            _ => None,
        }
    }

    /// Convert to the on-disk kind byte
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixKind::Dense => write!(f, "dense"),
        }
    }
}

/// Fixed-size header preceding every matrix payload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatHeader {
    /// Magic bytes: "MATF"
    pub magic: [u8; 4],
    /// Format version
    pub version: u8,
    /// Element type of the payload
    pub data_type: DataType,
    /// Matrix kind of the payload
    pub matrix_kind: MatrixKind,
    /// Reserved, must be zero
    pub _padding: u8,
    /// Number of rows
    pub rows: u64,
    /// Number of columns
    pub cols: u64,
    /// Reserved space for future extensions
    pub reserved: [u8; 32],
}

impl MatHeader {
    /// Magic bytes identifying a matrix file
    pub const MAGIC: [u8; 4] = *b"MATF";

    /// Current format version
    pub const VERSION: u8 = 1;

    /// Size of the header in bytes
    pub const SIZE: usize = size_of::<Self>();

    /// Create a header for a dense matrix of the given type and shape
    ///
    /// Fails with [`FormatError::InvalidShape`] if the payload length
    /// `rows * cols * element width` is not representable in 64 bits.
    pub fn new(data_type: DataType, rows: u64, cols: u64) -> Result<Self, FormatError> {
        let header = Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            data_type,
            matrix_kind: MatrixKind::Dense,
            _padding: 0,
            rows,
            cols,
            reserved: [0; 32],
        };
        // Reject shapes whose payload size cannot be computed
        header.payload_len()?;
        Ok(header)
    }

    /// Declared payload length in bytes, checked against overflow
    pub fn payload_len(&self) -> Result<u64, FormatError> {
        crate::validation::payload_len(self.rows, self.cols, self.data_type)
    }

    /// Parse a header from the leading bytes of a file
    ///
    /// Validates magic, version, and both tag bytes; never touches the
    /// payload region.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < Self::SIZE {
            return Err(FormatError::Truncated);
        }
        if bytes[0..4] != Self::MAGIC {
            return Err(FormatError::BadMagic);
        }

        let version = bytes[4];
        if version > Self::VERSION {
            return Err(FormatError::UnsupportedVersion);
        }

        let data_type = DataType::from_u8(bytes[5]).ok_or(FormatError::UnknownDataType)?;
        let matrix_kind = MatrixKind::from_u8(bytes[6]).ok_or(FormatError::UnknownMatrixKind)?;

        let rows = read_u64_le(bytes, 8);
        let cols = read_u64_le(bytes, 16);

        let mut reserved = [0u8; 32];
        reserved.copy_from_slice(&bytes[24..56]);

        Ok(Self {
            magic: Self::MAGIC,
            version,
            data_type,
            matrix_kind,
            _padding: bytes[7],
            rows,
            cols,
            reserved,
        })
    }

    /// Encode the header into its fixed-size byte layout
    pub fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes[5] = self.data_type.to_u8();
        bytes[6] = self.matrix_kind.to_u8();
        bytes[7] = self._padding;
        bytes[8..16].copy_from_slice(&self.rows.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.cols.to_le_bytes());
        bytes[24..56].copy_from_slice(&self.reserved);

        bytes
    }

    /// Encode the header into a heap buffer (requires the `alloc` feature)
    #[cfg(feature = "alloc")]
    pub fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        self.to_bytes_array().to_vec()
    }
}

fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(buf)
}
