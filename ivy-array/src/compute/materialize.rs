use ivy_error::IvyResult;
use log::debug;

use crate::Vector;
use crate::compute::ValueSource;

/// Copy every element of `source` into a new owned vector.
///
/// The result shares nothing with `source`.
pub fn to_vector<S: ValueSource>(source: &S) -> IvyResult<Vector> {
    debug!("materializing {} rows", source.len());
    (0..source.len()).map(|i| source.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::{ArrayRef, Float64Array, Int64Array};
    use arrow_schema::DataType;

    use super::*;
    use crate::test_harness::int_view;
    use crate::{ChunkedColumn, ColumnView, Config, Value};

    #[test]
    fn materializes_in_order() {
        let view = int_view(&[&[3, 1], &[4], &[], &[1, 5]]);
        assert_eq!(to_vector(&view).unwrap(), Vector::from_ints([3, 1, 4, 1, 5]));
    }

    #[test]
    fn rematerializing_is_idempotent() {
        let view = int_view(&[&[3, 1], &[4, 1, 5]]);
        let once = to_vector(&view).unwrap();
        assert_eq!(to_vector(&once).unwrap(), once);
        assert_eq!(to_vector(&view).unwrap(), once);
    }

    #[test]
    fn copies_are_independent() {
        let view = int_view(&[&[3, 1]]);
        let mut copy = to_vector(&view).unwrap();
        copy[0] = Value::from(42i64);
        assert_eq!(view.get(0).unwrap(), Value::from(3i64));
    }

    #[test]
    fn first_failure_aborts() {
        let column = ChunkedColumn::try_new(
            vec![Arc::new(Float64Array::from(vec![1.0, f64::NAN])) as ArrayRef],
            DataType::Float64,
        )
        .unwrap();
        let view = ColumnView::new(column, Config::default());
        assert!(to_vector(&view).is_err());

        let nulls = ChunkedColumn::try_new(
            vec![Arc::new(Int64Array::from(vec![Some(1), None])) as ArrayRef],
            DataType::Int64,
        )
        .unwrap();
        assert!(to_vector(&ColumnView::new(nulls, Config::default())).is_err());
    }
}
