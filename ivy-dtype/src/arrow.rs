//! Convert between Ivy [`PType`]s and Arrow [`DataType`]s.

use arrow_schema::DataType;
use ivy_error::{IvyError, IvyResult, ivy_bail};

use crate::PType;

impl TryFrom<&DataType> for PType {
    type Error = IvyError;

    fn try_from(value: &DataType) -> IvyResult<Self> {
        Ok(match value {
            DataType::Int8 => Self::I8,
            DataType::Int16 => Self::I16,
            DataType::Int32 => Self::I32,
            DataType::Int64 => Self::I64,
            DataType::UInt8 => Self::U8,
            DataType::UInt16 => Self::U16,
            DataType::UInt32 => Self::U32,
            DataType::UInt64 => Self::U64,
            DataType::Float32 => Self::F32,
            DataType::Float64 => Self::F64,
            _ => ivy_bail!(UnsupportedType: value),
        })
    }
}

impl From<PType> for DataType {
    fn from(value: PType) -> Self {
        match value {
            PType::I8 => Self::Int8,
            PType::I16 => Self::Int16,
            PType::I32 => Self::Int32,
            PType::I64 => Self::Int64,
            PType::U8 => Self::UInt8,
            PType::U16 => Self::UInt16,
            PType::U32 => Self::UInt32,
            PType::U64 => Self::UInt64,
            PType::F32 => Self::Float32,
            PType::F64 => Self::Float64,
        }
    }
}
