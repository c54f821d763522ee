use std::fmt::{Debug, Display};

use super::ValueOutOfRange;

const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;
const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// An unboxed value that can be stored in a primitive list.
///
/// Lists never compare or hash their elements through [`PartialEq`] or [`Hash`](std::hash::Hash)
/// directly. They use [`Primitive::same`] and [`Primitive::hash_code`] instead, which agree with
/// each other for every type, floating point included: two floats are the same when their
/// canonical bit patterns are equal, so `NaN` is the same as itself and `0.0` is not the same as
/// `-0.0`.
pub trait Primitive: Copy + PartialEq + Debug + Display + Default + Send + Sync + 'static {
    /// A 32-bit hash of the value, stable across runs and platforms.
    fn hash_code(self) -> i32;

    /// Element equality, as used by lists.
    fn same(self, other: Self) -> bool {
        self == other
    }
}

macro_rules! impl_primitive_narrow {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn hash_code(self) -> i32 {
                    self as i32
                }
            }
        )*
    };
}

macro_rules! impl_primitive_wide {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn hash_code(self) -> i32 {
                    fold_u64(self as u64)
                }
            }
        )*
    };
}

impl_primitive_narrow!(i8, u8, i16, u16, i32, u32);
impl_primitive_wide!(i64, u64);

impl Primitive for bool {
    fn hash_code(self) -> i32 {
        if self { 1231 } else { 1237 }
    }
}

impl Primitive for char {
    fn hash_code(self) -> i32 {
        self as i32
    }
}

impl Primitive for f32 {
    fn hash_code(self) -> i32 {
        canonical_f32(self) as i32
    }

    fn same(self, other: Self) -> bool {
        canonical_f32(self) == canonical_f32(other)
    }
}

impl Primitive for f64 {
    fn hash_code(self) -> i32 {
        fold_u64(canonical_f64(self))
    }

    fn same(self, other: Self) -> bool {
        canonical_f64(self) == canonical_f64(other)
    }
}

const fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

fn canonical_f32(value: f32) -> u32 {
    if value.is_nan() { CANONICAL_NAN_F32 } else { value.to_bits() }
}

fn canonical_f64(value: f64) -> u64 {
    if value.is_nan() { CANONICAL_NAN_F64 } else { value.to_bits() }
}

/// The storage cell used by an array-backed list for logical elements of type `T`.
///
/// Every [`Primitive`] is its own representation. Narrower representations trade range for
/// space: they validate values on the way in and widen them again on the way out.
pub trait Repr<T: Primitive>: Copy + Default + Send + Sync + 'static {
    /// Converts a logical value into a cell, failing if the value can't be represented.
    fn encode(value: T) -> Result<Self, ValueOutOfRange>;

    /// Converts a cell back into its logical value.
    fn decode(self) -> T;
}

impl<T: Primitive> Repr<T> for T {
    fn encode(value: T) -> Result<Self, ValueOutOfRange> {
        Ok(value)
    }

    fn decode(self) -> T {
        self
    }
}

/// Unsigned bytes (`0..=255`) held as `i16`, stored in `i8` cells.
impl Repr<i16> for i8 {
    fn encode(value: i16) -> Result<Self, ValueOutOfRange> {
        match u8::try_from(value) {
            Ok(byte) => Ok(byte as i8),
            Err(_) => Err(ValueOutOfRange {
                value: value.into(),
                min: u8::MIN.into(),
                max: u8::MAX.into(),
            }),
        }
    }

    fn decode(self) -> i16 {
        (self as u8).into()
    }
}

/// Unsigned shorts (`0..=65535`) held as `i32`, stored in `i16` cells.
impl Repr<i32> for i16 {
    fn encode(value: i32) -> Result<Self, ValueOutOfRange> {
        match u16::try_from(value) {
            Ok(short) => Ok(short as i16),
            Err(_) => Err(ValueOutOfRange {
                value: value.into(),
                min: u16::MIN.into(),
                max: u16::MAX.into(),
            }),
        }
    }

    fn decode(self) -> i32 {
        (self as u16).into()
    }
}
