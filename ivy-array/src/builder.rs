//! Converting values back into single-chunk columns.

use std::sync::Arc;

use arrow_array::{ArrayRef, PrimitiveArray};
use arrow_buffer::{ArrowNativeType, ScalarBuffer};
use arrow_schema::DataType;
use itertools::Itertools;
use ivy_dtype::{NativePType, PType};
use ivy_error::{IvyResult, ivy_bail, ivy_err};
use ivy_scalar::{BigFloat, BigInt};
use log::debug;
use num_traits::ToPrimitive;

use crate::{ChunkedColumn, Table, Value, ValueKind};

/// Name given to anonymous integer columns.
pub const INT_COLUMN_NAME: &str = "I";
/// Name given to anonymous float columns.
pub const FLOAT_COLUMN_NAME: &str = "F";

/// Builds a column holding a scalar or the elements of a vector.
///
/// Integers go into an `Int64` chunk when every value fits, else a `UInt64` chunk. Floats go
/// into a `Float64` chunk, rounded to the nearest `f64`. Mixed vectors are rejected rather than
/// coerced, and existing column views pass through without copying.
#[derive(Clone, Debug, Default)]
pub struct ColumnBuilder {
    name: Option<String>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the column of tables built by [`ColumnBuilder::build_table`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(&self, value: &Value) -> IvyResult<ChunkedColumn> {
        let column = match value {
            Value::Column(view) => return Ok(view.column().clone()),
            Value::Int(i) => int_column(&[i])?,
            Value::Float(f) => float_column(&[f])?,
            Value::Vector(vector) => {
                let elems = vector.as_slice();
                if let Some(ints) = elems.iter().map(Value::as_int).collect::<Option<Vec<_>>>() {
                    int_column(&ints)?
                } else if let Some(floats) = elems
                    .iter()
                    .map(|v| match v {
                        Value::Float(f) => Some(f),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
                {
                    float_column(&floats)?
                } else {
                    let kinds = elems.iter().map(Value::kind);
                    ivy_bail!(
                        Conversion: "vector of {} elements has no single column type",
                        describe_kinds(kinds)
                    )
                }
            }
            other => ivy_bail!(Conversion: "{} has no column type", other.kind()),
        };

        debug!("built {} column of {} rows", column.data_type(), column.len());
        Ok(column)
    }

    /// Build the column and wrap it in a single column table.
    pub fn build_table(&self, value: &Value) -> IvyResult<Table> {
        let column = self.build(value)?;
        let name = match &self.name {
            Some(name) => name.as_str(),
            None => default_name(column.data_type()),
        };
        Table::single(name, column)
    }
}

fn default_name(data_type: &DataType) -> &'static str {
    match PType::try_from(data_type) {
        Ok(ptype) if ptype.is_float() => FLOAT_COLUMN_NAME,
        _ => INT_COLUMN_NAME,
    }
}

fn describe_kinds(kinds: impl Iterator<Item = ValueKind>) -> String {
    let mut seen: Vec<ValueKind> = Vec::new();
    for kind in kinds {
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    seen.iter().join(" and ")
}

fn single_chunk<T: NativePType + ArrowNativeType>(values: Vec<T>) -> IvyResult<ChunkedColumn> {
    let array: ArrayRef = Arc::new(PrimitiveArray::<T::ArrowType>::new(
        ScalarBuffer::<T>::from(values),
        None,
    ));
    ChunkedColumn::try_new(vec![array], T::PTYPE.into())
}

fn int_column(ints: &[&BigInt]) -> IvyResult<ChunkedColumn> {
    if let Some(values) = ints.iter().map(|i| i.to_i64()).collect::<Option<Vec<_>>>() {
        return single_chunk(values);
    }
    if let Some(values) = ints.iter().map(|i| i.to_u64()).collect::<Option<Vec<_>>>() {
        return single_chunk(values);
    }

    let unfit = ints
        .iter()
        .find(|i| i.to_i64().is_none() && i.to_u64().is_none())
        .ok_or_else(|| ivy_err!(Conversion: "integers span both i64 and u64 ranges"))?;
    ivy_bail!(
        Conversion: "integer {} does not fit a {}-bit column",
        unfit,
        PType::U64.bit_width()
    )
}

fn float_column(floats: &[&BigFloat]) -> IvyResult<ChunkedColumn> {
    let values = floats.iter().map(|f| f.to_f64()).collect();
    single_chunk::<f64>(values)
}

#[cfg(test)]
mod tests {
    use arrow_array::Array;
    use arrow_array::cast::AsArray;
    use arrow_array::types::Float64Type;
    use rstest::rstest;

    use super::*;
    use crate::compute::to_vector;
    use crate::test_harness::int_view;
    use crate::{ColumnView, Config, Vector};

    fn round_trip(column: &ChunkedColumn) -> Vector {
        to_vector(&ColumnView::new(column.clone(), Config::default())).unwrap()
    }

    #[test]
    fn scalar_int_is_one_row() {
        let column = ColumnBuilder::new().build(&Value::from(-5i64)).unwrap();
        assert_eq!(column.data_type(), &DataType::Int64);
        assert_eq!(column.nchunks(), 1);
        assert_eq!(round_trip(&column), Vector::from_ints([-5]));
    }

    #[test]
    fn large_unsigned_ints_widen_to_u64() {
        let big = BigInt::from(u64::MAX);
        let vector = Vector::new(vec![Value::from(1i64), Value::Int(big.clone())]);
        let column = ColumnBuilder::new().build(&Value::from(vector)).unwrap();
        assert_eq!(column.data_type(), &DataType::UInt64);
        assert_eq!(
            round_trip(&column),
            Vector::new(vec![Value::from(1i64), Value::Int(big)])
        );
    }

    #[rstest]
    #[case(vec![BigInt::from(u64::MAX), BigInt::from(-1)], "integers span both i64 and u64 ranges")]
    #[case(vec![BigInt::from(u64::MAX) + 1], "does not fit a 64-bit column")]
    fn ints_beyond_64_bits_fail(#[case] ints: Vec<BigInt>, #[case] message: &str) {
        let vector: Vector = ints.into_iter().map(Value::Int).collect();
        let err = ColumnBuilder::new().build(&Value::from(vector)).unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains(message));
    }

    #[test]
    fn floats_build_float64() {
        let vector: Vector = [0.5, -2.0]
            .into_iter()
            .map(|f| Value::Float(BigFloat::from_f64(f, 256).unwrap()))
            .collect();
        let column = ColumnBuilder::new().build(&Value::from(vector.clone())).unwrap();
        assert_eq!(column.data_type(), &DataType::Float64);
        assert_eq!(round_trip(&column), vector);
    }

    #[test]
    fn mixed_vectors_fail_fast() {
        let vector = Vector::new(vec![
            Value::from(1i64),
            Value::Float(BigFloat::from_f64(1.5, 64).unwrap()),
            Value::from(2i64),
        ]);
        let err = ColumnBuilder::new().build(&Value::from(vector)).unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains("vector of int and float elements"));
    }

    #[rstest]
    #[case(Value::from('c'))]
    #[case(Value::Vector(Vector::new(vec![Value::from('c')])))]
    fn chars_have_no_column(#[case] value: Value) {
        assert!(ColumnBuilder::new().build(&value).unwrap_err().is_conversion());
    }

    #[test]
    fn empty_vector_is_an_empty_int_column() {
        let column = ColumnBuilder::new().build(&Value::from(Vector::default())).unwrap();
        assert_eq!(column.data_type(), &DataType::Int64);
        assert_eq!(column.nchunks(), 1);
        assert!(column.is_empty());
    }

    #[test]
    fn columns_pass_through() {
        let view = int_view(&[&[1, 2], &[3]]);
        let column = ColumnBuilder::new().build(&Value::from(view.clone())).unwrap();
        assert_eq!(column.nchunks(), 2);
        let shared = view.column().chunk(0).unwrap();
        let passed = column.chunk(0).unwrap();
        assert!(Arc::ptr_eq(shared, passed));
    }

    #[test]
    fn tables_use_default_names() {
        let ints = ColumnBuilder::new().build_table(&Value::from(3i64)).unwrap();
        assert!(ints.column(INT_COLUMN_NAME).is_some());

        let float = Value::Float(BigFloat::from_f64(0.25, 64).unwrap());
        let floats = ColumnBuilder::new().build_table(&float).unwrap();
        let column = floats.column(FLOAT_COLUMN_NAME).unwrap();
        let chunk = column.chunk(0).unwrap();
        assert_eq!(chunk.as_primitive::<Float64Type>().value(0), 0.25);
        assert_eq!(chunk.len(), 1);

        let named = ColumnBuilder::new()
            .with_name("price")
            .build_table(&float)
            .unwrap();
        assert_eq!(named.num_rows(), 1);
        assert!(named.column("price").is_some());
    }
}
