//! Matrix element type constraints
//!
//! Defines the trait that constrains what types can be stored as matrix
//! elements, and implements it for the ten supported numeric types. The
//! mapping from in-memory type to on-disk tag is total and one-to-one.

use crate::format::DataType;

/// Trait for types that can be stored as matrix elements
///
/// Every implementor maps to exactly one [`DataType`] tag and defines its
/// fixed little-endian byte representation. The `from_f64`/`to_f64` pair
/// supports explicit widening where a common numeric type is needed; both
/// use plain numeric casts and may round for 64-bit integers.
pub trait Element: bytemuck::Pod + PartialEq {
    /// Fixed-size little-endian byte representation
    type Bytes: AsRef<[u8]>;

    /// On-disk tag for this element type
    fn data_type() -> DataType;

    /// Element width in bytes
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Encode into little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;

    /// Decode from the first `size_bytes()` of `bytes`, little-endian
    ///
    /// Returns `None` when fewer bytes are available.
    fn read_le(bytes: &[u8]) -> Option<Self>;

    /// Widen from f64
    fn from_f64(value: f64) -> Self;

    /// Widen to f64
    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            fn data_type() -> DataType {
                DataType::$variant
            }

            fn to_le_bytes(self) -> Self::Bytes {
                <$ty>::to_le_bytes(self)
            }

            fn read_le(bytes: &[u8]) -> Option<Self> {
                const SIZE: usize = core::mem::size_of::<$ty>();
                if bytes.len() < SIZE {
                    return None;
                }
                let mut buf = [0u8; SIZE];
                buf.copy_from_slice(&bytes[..SIZE]);
                Some(<$ty>::from_le_bytes(buf))
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_element!(f32, F32);
impl_element!(f64, F64);
impl_element!(i8, I8);
impl_element!(i16, I16);
impl_element!(i32, I32);
impl_element!(i64, I64);
impl_element!(u8, U8);
impl_element!(u16, U16);
impl_element!(u32, U32);
impl_element!(u64, U64);
