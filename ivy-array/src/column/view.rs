use arrow_schema::DataType;
use ivy_error::IvyResult;
use ivy_scalar::PValue;

use crate::column::ChunkedColumn;
use crate::column::decode::{decode_pvalue, read_pvalue};
use crate::compute::to_vector;
use crate::{Config, Value, Vector};

/// A read-only, one-dimensional view of a chunked column.
///
/// The view carries a copy of the [`Config`] it was bound with: the same bytes decode to floats
/// of different precision under different configurations. Views never copy chunk data;
/// [`ColumnView::slice`] and [`ColumnView::with_config`] share the backing storage.
#[derive(Clone, Debug)]
pub struct ColumnView {
    column: ChunkedColumn,
    config: Config,
}

#[allow(clippy::same_name_method)]
impl ColumnView {
    pub fn new(column: ChunkedColumn, config: Config) -> Self {
        Self { column, config }
    }

    /// Rebind the view to another configuration.
    pub fn with_config(&self, config: Config) -> Self {
        Self {
            column: self.column.clone(),
            config,
        }
    }

    #[inline]
    pub fn column(&self) -> &ChunkedColumn {
        &self.column
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn data_type(&self) -> &DataType {
        self.column.data_type()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.column.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }

    /// The raw element at logical index `i`.
    pub fn get_pvalue(&self, i: usize) -> IvyResult<PValue> {
        let (chunk, offset) = self.column.find_chunk_idx(i)?;
        let ptype = self.column.ptype()?;
        read_pvalue(self.column.chunk(chunk)?.as_ref(), offset, ptype)
    }

    /// Decode the element at logical index `i`.
    ///
    /// # Errors
    ///
    /// Fails with a range error when `i` is out of bounds, and with an unsupported type error when
    /// the column's storage type has no value mapping. Null slots and NaN floats have no value
    /// and fail as invalid arguments.
    pub fn get(&self, i: usize) -> IvyResult<Value> {
        decode_pvalue(self.get_pvalue(i)?, self.config.float_prec())
    }

    /// A zero-copy view of rows `[begin, end)`.
    pub fn slice(&self, begin: usize, end: usize) -> IvyResult<Self> {
        Ok(Self {
            column: self.column.slice(begin, end)?,
            config: self.config,
        })
    }

    /// Columns are read-only, so a copy is a dense vector.
    pub fn copy(&self) -> IvyResult<Vector> {
        to_vector(self)
    }
}

/// Views are equal when they share chunks and configuration, or else when they decode to the
/// same elements under their own configurations.
impl PartialEq for ColumnView {
    fn eq(&self, other: &Self) -> bool {
        if self.config == other.config && self.column.shares_chunks(&other.column) {
            return true;
        }
        self.len() == other.len()
            && (0..self.len()).all(|i| match (self.get(i), other.get(i)) {
                (Ok(lhs), Ok(rhs)) => lhs == rhs,
                _ => false,
            })
    }
}
