use ivy_error::IvyResult;

use crate::Value;
use crate::compute::ValueSource;

/// Whether every element is a char. Vacuously true when empty.
///
/// Sources with a known storage type hold numbers only, so they are all chars only when empty.
pub fn all_chars<S: ValueSource>(source: &S) -> IvyResult<bool> {
    if source.ptype().is_some() {
        return Ok(source.is_empty());
    }
    all(source, |v| matches!(v, Value::Char(_)))
}

/// Whether every element is an exact integer. Vacuously true when empty.
///
/// Integer storage without nulls answers without decoding. Anything else is inspected element by
/// element, so a null slot fails like it fails [`ValueSource::get`].
pub fn all_ints<S: ValueSource>(source: &S) -> IvyResult<bool> {
    match source.ptype() {
        Some(ptype) if ptype.is_int() && source.null_count() == 0 => Ok(true),
        _ => all(source, |v| matches!(v, Value::Int(_))),
    }
}

fn all<S: ValueSource>(source: &S, pred: impl Fn(&Value) -> bool) -> IvyResult<bool> {
    for i in 0..source.len() {
        if !pred(&source.get(i)?) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow_array::{ArrayRef, Int64Array};
    use arrow_schema::DataType;

    use super::*;
    use crate::{ChunkedColumn, ColumnView, Config, Vector};
    use crate::test_harness::{float_view, int_view};

    #[test]
    fn chars() {
        let word: Vector = "abc".chars().map(Value::from).collect();
        assert!(all_chars(&word).unwrap());
        assert!(!all_chars(&Vector::new(vec![Value::from('a'), Value::from(1i64)])).unwrap());
        assert!(all_chars(&Vector::default()).unwrap());
        assert!(!all_chars(&int_view(&[&[97]])).unwrap());
        assert!(all_chars(&int_view(&[&[]])).unwrap());
    }

    #[test]
    fn ints() {
        assert!(all_ints(&int_view(&[&[1, 2], &[3]])).unwrap());
        assert!(!all_ints(&float_view(&[&[1.0]])).unwrap());
        assert!(all_ints(&float_view(&[&[]])).unwrap());
        assert!(all_ints(&Vector::from_ints([4, 5])).unwrap());
        assert!(!all_ints(&Vector::new(vec![Value::from('x')])).unwrap());
    }

    #[test]
    fn null_slots_are_not_ints() {
        let column = ChunkedColumn::try_new(
            vec![
                Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef,
                Arc::new(Int64Array::from(vec![Some(1), None])),
            ],
            DataType::Int64,
        )
        .unwrap();
        let view = ColumnView::new(column, Config::default());
        assert!(view.get(3).is_err());
        assert!(all_ints(&view).is_err());
        assert!(all_ints(&view.slice(0, 3).unwrap()).unwrap());
    }
}
