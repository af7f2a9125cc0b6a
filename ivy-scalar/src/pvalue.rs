use std::fmt::{Display, Formatter};

use ivy_error::{IvyResult, ivy_bail};
use num_bigint::BigInt;

use crate::BigFloat;

/// A single primitive value read out of a chunk, still in its storage width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PValue {
    /// A `u8` element
    U8(u8),
    /// A `u16` element
    U16(u16),
    /// A `u32` element
    U32(u32),
    /// A `u64` element
    U64(u64),
    /// A `i8` element
    I8(i8),
    /// A `i16` element
    I16(i16),
    /// A `i32` element
    I32(i32),
    /// A `i64` element
    I64(i64),
    /// A `f32` element
    F32(f32),
    /// A `f64` element
    F64(f64),
}

impl PValue {
    /// Widen an integer value to an exact integer; `None` for floats.
    pub fn to_bigint(self) -> Option<BigInt> {
        match self {
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::F32(_) | Self::F64(_) => None,
        }
    }

    /// Convert to an arbitrary-precision float holding `prec` mantissa bits.
    ///
    /// Integers are rounded to `prec` bits as well; floats keep their exact value whenever
    /// `prec` covers the source mantissa.
    pub fn to_bigfloat(self, prec: u32) -> IvyResult<BigFloat> {
        match self {
            Self::F32(v) => BigFloat::from_f32(v, prec),
            Self::F64(v) => BigFloat::from_f64(v, prec),
            int => match int.to_bigint() {
                Some(v) => BigFloat::from_bigint(&v, prec),
                None => ivy_bail!(Conversion: "{} has no integer value", int),
            },
        }
    }
}

macro_rules! impl_pvalue {
    ($T:ty, $PT:tt) => {
        impl From<$T> for PValue {
            fn from(value: $T) -> Self {
                PValue::$PT(value)
            }
        }
    };
}

impl_pvalue!(u8, U8);
impl_pvalue!(u16, U16);
impl_pvalue!(u32, U32);
impl_pvalue!(u64, U64);
impl_pvalue!(i8, I8);
impl_pvalue!(i16, I16);
impl_pvalue!(i32, I32);
impl_pvalue!(i64, I64);
impl_pvalue!(f32, F32);
impl_pvalue!(f64, F64);

impl Display for PValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{}u8", v),
            Self::U16(v) => write!(f, "{}u16", v),
            Self::U32(v) => write!(f, "{}u32", v),
            Self::U64(v) => write!(f, "{}u64", v),
            Self::I8(v) => write!(f, "{}i8", v),
            Self::I16(v) => write!(f, "{}i16", v),
            Self::I32(v) => write!(f, "{}i32", v),
            Self::I64(v) => write!(f, "{}i64", v),
            Self::F32(v) => write!(f, "{}f32", v),
            Self::F64(v) => write!(f, "{}f64", v),
        }
    }
}
