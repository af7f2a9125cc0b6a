//! Vector algorithms over any indexable, read-only sequence of values.
//!
//! Every algorithm is written against [`ValueSource`], implemented by both chunked
//! [`ColumnView`]s and materialized [`Vector`]s. Slicing stays zero-copy where the source allows
//! it; everything that reorders elements materializes. Ordering algorithms never compare values
//! themselves, they delegate to a [`Comparator`](crate::Comparator), usually the evaluator.

pub use contains::*;
pub use grade::*;
pub use materialize::*;
pub use membership::*;
pub use predicates::*;
pub use reverse::*;
pub use rotate::*;
pub use shrink::*;
pub use slice::*;
pub use sorted_copy::*;
pub use to_type::*;

use ivy_dtype::PType;
use ivy_error::{IvyResult, ivy_err};

use crate::{ColumnView, Value, Vector};

mod contains;
mod grade;
mod materialize;
mod membership;
mod predicates;
mod reverse;
mod rotate;
mod shrink;
mod slice;
mod sort;
mod sorted_copy;
mod to_type;

/// A read-only sequence of values with random access.
pub trait ValueSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, failing when it is out of bounds or cannot be represented.
    fn get(&self, index: usize) -> IvyResult<Value>;

    /// The rows `[begin, end)`. Callers guarantee `begin <= end <= len`.
    fn slice_unchecked(&self, begin: usize, end: usize) -> IvyResult<Self>
    where
        Self: Sized;

    /// The sequence itself as a language value.
    fn to_value(&self) -> Value;

    /// The storage type shared by every element, when it is known without decoding.
    fn ptype(&self) -> Option<PType> {
        None
    }

    /// The number of slots known to hold no value without decoding.
    fn null_count(&self) -> usize {
        0
    }
}

#[allow(clippy::same_name_method)]
impl ValueSource for ColumnView {
    fn len(&self) -> usize {
        ColumnView::len(self)
    }

    fn get(&self, index: usize) -> IvyResult<Value> {
        ColumnView::get(self, index)
    }

    fn slice_unchecked(&self, begin: usize, end: usize) -> IvyResult<Self> {
        self.slice(begin, end)
    }

    fn to_value(&self) -> Value {
        Value::Column(self.clone())
    }

    fn ptype(&self) -> Option<PType> {
        self.column().ptype().ok()
    }

    fn null_count(&self) -> usize {
        self.column().null_count()
    }
}

#[allow(clippy::same_name_method)]
impl ValueSource for Vector {
    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn get(&self, index: usize) -> IvyResult<Value> {
        self.as_slice()
            .get(index)
            .cloned()
            .ok_or_else(|| ivy_err!(OutOfBounds: index, 0, Vector::len(self)))
    }

    fn slice_unchecked(&self, begin: usize, end: usize) -> IvyResult<Self> {
        Ok(self.as_slice()[begin..end].iter().cloned().collect())
    }

    fn to_value(&self) -> Value {
        Value::Vector(self.clone())
    }
}
