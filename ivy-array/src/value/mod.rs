//! The closed set of values the vector layer exchanges with the evaluator.

use std::fmt::{Display, Formatter};

use ivy_scalar::{BigFloat, BigInt};

pub use matrix::*;
pub use vector::*;

use crate::ColumnView;

mod display;
mod matrix;
mod vector;

/// A value of the array language, as far as the vector layer is concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An exact integer; every integer storage width widens to this.
    Int(BigInt),
    /// An arbitrary-precision float.
    Float(BigFloat),
    Char(char),
    /// An owned, mutable, dense array.
    Vector(Vector),
    Matrix(Matrix),
    /// A read-only view onto chunked storage.
    Column(ColumnView),
}

/// The kind of a [`Value`], used to name conversion targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Int,
    Float,
    Char,
    Vector,
    Matrix,
    Column,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Char(_) => ValueKind::Char,
            Self::Vector(_) => ValueKind::Vector,
            Self::Matrix(_) => ValueKind::Matrix,
            Self::Column(_) => ValueKind::Column,
        }
    }

    /// 0 for scalars, 1 for vectors and columns, the shape length for matrices.
    pub fn rank(&self) -> usize {
        match self {
            Self::Int(_) | Self::Float(_) | Self::Char(_) => 0,
            Self::Vector(_) | Self::Column(_) => 1,
            Self::Matrix(m) => m.rank(),
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Char => write!(f, "char"),
            Self::Vector => write!(f, "vector"),
            Self::Matrix => write!(f, "matrix"),
            Self::Column => write!(f, "column"),
        }
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Int(u8::from(value).into())
    }
}

impl From<BigFloat> for Value {
    fn from(value: BigFloat) -> Self {
        Self::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<Vector> for Value {
    fn from(value: Vector) -> Self {
        Self::Vector(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Self::Matrix(value)
    }
}

impl From<ColumnView> for Value {
    fn from(value: ColumnView) -> Self {
        Self::Column(value)
    }
}
