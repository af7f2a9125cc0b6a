use arrow_array::{ArrayRef, RecordBatch};
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use itertools::Itertools;
use ivy_error::{ContextExt, IvyResult, ivy_bail, ivy_err};
use log::debug;

use crate::{ChunkSource, ChunkedColumn, ColumnView, Config, Value};

/// Named chunked columns of equal length, as produced by the ingestion layer.
#[derive(Clone, Debug)]
pub struct Table {
    schema: SchemaRef,
    columns: Vec<ChunkedColumn>,
}

/// One column of a sequence of record batches, with a chunk per batch.
#[derive(Debug)]
struct BatchColumn<'a> {
    batches: &'a [RecordBatch],
    index: usize,
    data_type: &'a DataType,
}

impl ChunkSource for BatchColumn<'_> {
    fn data_type(&self) -> &DataType {
        self.data_type
    }

    fn nchunks(&self) -> usize {
        self.batches.len()
    }

    fn chunk(&self, idx: usize) -> IvyResult<ArrayRef> {
        self.batches
            .get(idx)
            .map(|batch| batch.column(self.index).clone())
            .ok_or_else(|| ivy_err!(OutOfBounds: idx, 0, self.batches.len()))
    }
}

impl Table {
    pub fn try_new(schema: SchemaRef, columns: Vec<ChunkedColumn>) -> IvyResult<Self> {
        if schema.fields().len() != columns.len() {
            ivy_bail!(
                "schema has {} fields but {} columns were given",
                schema.fields().len(),
                columns.len()
            );
        }
        for (field, column) in schema.fields().iter().zip(&columns) {
            if field.data_type() != column.data_type() {
                ivy_bail!(MismatchedTypes: field.data_type(), column.data_type());
            }
        }
        if !columns.iter().map(|c| c.len()).all_equal() {
            ivy_bail!("columns of table must all have the same length");
        }
        Ok(Self { schema, columns })
    }

    /// A single column table.
    pub fn single(name: &str, column: ChunkedColumn) -> IvyResult<Self> {
        let schema = Schema::new(vec![Field::new(name, column.data_type().clone(), false)]);
        Self::try_new(schema.into(), vec![column])
    }

    /// Build a table whose columns hold one chunk per batch, sharing the batches' buffers.
    pub fn try_from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> IvyResult<Self> {
        for batch in batches {
            if batch.schema().as_ref() != schema.as_ref() {
                ivy_bail!(MismatchedTypes: schema, batch.schema());
            }
        }

        let columns = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| {
                ChunkedColumn::try_from_source(&BatchColumn {
                    batches,
                    index,
                    data_type: field.data_type(),
                })
                .with_context(|| format!("column {}", field.name()))
            })
            .collect::<IvyResult<Vec<_>>>()?;
        Self::try_new(schema, columns)
    }

    #[inline]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    pub fn column(&self, name: &str) -> Option<&ChunkedColumn> {
        let (index, _) = self.schema.column_with_name(name)?;
        self.columns.get(index)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ChunkedColumn)> + '_ {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .zip(&self.columns)
    }

    /// One `(name, view)` pair per column, for binding into an evaluator's globals.
    pub fn bind(&self, config: Config) -> Vec<(String, Value)> {
        debug!(
            "binding {} columns of {} rows",
            self.num_columns(),
            self.num_rows()
        );
        self.columns()
            .map(|(name, column)| {
                let view = ColumnView::new(column.clone(), config);
                (name.to_string(), Value::Column(view))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::{Float32Array, Int16Array};

    use super::*;
    use crate::Vector;
    use crate::compute::to_vector;

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("x", DataType::Int16, false),
            Field::new("y", DataType::Float32, false),
        ]))
    }

    fn batch(xs: Vec<i16>, ys: Vec<f32>) -> RecordBatch {
        RecordBatch::try_new(
            schema(),
            vec![
                Arc::new(Int16Array::from(xs)) as ArrayRef,
                Arc::new(Float32Array::from(ys)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn one_chunk_per_batch() {
        let table = Table::try_from_batches(
            schema(),
            &[batch(vec![3, 1], vec![0.5, 1.5]), batch(vec![4], vec![2.5])],
        )
        .unwrap();
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.num_rows(), 3);
        let x = table.column("x").unwrap();
        assert_eq!(x.nchunks(), 2);
        assert!(table.column("z").is_none());
    }

    #[test]
    fn binds_named_views() {
        let table = Table::try_from_batches(schema(), &[batch(vec![3, 1, 4], vec![0.0; 3])]).unwrap();
        let config = Config::try_new(0, 53).unwrap();
        let bound = table.bind(config);
        assert_eq!(bound.len(), 2);
        assert_eq!(bound[0].0, "x");
        let Value::Column(x) = &bound[0].1 else {
            panic!("expected a column");
        };
        assert_eq!(x.config(), &config);
        assert_eq!(to_vector(x).unwrap(), Vector::from_ints([3, 1, 4]));
    }

    #[test]
    fn rejects_foreign_batches() {
        let other = RecordBatch::try_new(
            Arc::new(Schema::new(vec![Field::new("x", DataType::Int16, false)])),
            vec![Arc::new(Int16Array::from(vec![1])) as ArrayRef],
        )
        .unwrap();
        assert!(Table::try_from_batches(schema(), &[other]).is_err());
    }

    #[test]
    fn no_batches_is_an_empty_table() {
        let table = Table::try_from_batches(schema(), &[]).unwrap();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.column("y").unwrap().data_type(), &DataType::Float32);
    }

    #[test]
    fn columns_must_agree_in_length() {
        let short = ChunkedColumn::try_new(
            vec![Arc::new(Int16Array::from(vec![1])) as ArrayRef],
            DataType::Int16,
        )
        .unwrap();
        let long = ChunkedColumn::try_new(
            vec![Arc::new(Float32Array::from(vec![1.0, 2.0])) as ArrayRef],
            DataType::Float32,
        )
        .unwrap();
        assert!(Table::try_new(schema(), vec![short, long]).is_err());
    }
}
