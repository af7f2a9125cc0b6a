//! Chunked columnar vectors for the Ivy array language.
//!
//! Ingested data arrives as Arrow arrays split into chunks. A [`ChunkedColumn`] keeps those chunks
//! together under one declared type, and a [`ColumnView`] presents the column to the evaluator as
//! a flat, read-only vector whose elements decode to exact integers or to floats at the
//! configured precision.
//!
//! The [`compute`] module holds the vector algorithms (slicing, reordering, grading and
//! searching). They run against any [`ValueSource`](compute::ValueSource), so columns and
//! materialized [`Vector`]s share one implementation. [`ColumnBuilder`] goes the other way and
//! turns evaluated values back into columns.

pub use builder::*;
pub use column::*;
pub use context::*;
pub use table::*;
pub use value::*;

mod builder;
pub mod column;
pub mod compute;
mod context;
mod table;
#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;
mod value;
