use ivy_error::{IvyResult, ivy_bail};

use crate::compute::to_vector;
use crate::{ColumnView, Matrix, Value, ValueKind};

/// Convert a column view into a value of kind `target`.
///
/// Columns convert to a dense vector, or to a matrix of shape `[len]`.
///
/// # Errors
///
/// Any other target fails with a conversion error.
pub fn to_type(view: &ColumnView, target: ValueKind) -> IvyResult<Value> {
    match target {
        ValueKind::Vector => to_vector(view).map(Value::Vector),
        ValueKind::Matrix => {
            Matrix::try_new(vec![view.len()], to_vector(view)?).map(Value::Matrix)
        }
        other => ivy_bail!(Conversion: "cannot convert {} to {}", ValueKind::Column, other),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Vector;
    use crate::test_harness::int_view;

    #[test]
    fn to_vector_target() {
        let view = int_view(&[&[3, 1], &[4]]);
        assert_eq!(
            to_type(&view, ValueKind::Vector).unwrap(),
            Value::Vector(Vector::from_ints([3, 1, 4]))
        );
    }

    #[test]
    fn to_matrix_target() {
        let view = int_view(&[&[3, 1], &[4]]);
        let Value::Matrix(matrix) = to_type(&view, ValueKind::Matrix).unwrap() else {
            panic!("expected a matrix");
        };
        assert_eq!(matrix.shape(), &[3]);
        assert_eq!(matrix.data(), &Vector::from_ints([3, 1, 4]));
    }

    #[rstest]
    #[case(ValueKind::Int)]
    #[case(ValueKind::Float)]
    #[case(ValueKind::Char)]
    #[case(ValueKind::Column)]
    fn other_targets_fail(#[case] target: ValueKind) {
        let err = to_type(&int_view(&[&[1]]), target).unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains(&format!("cannot convert column to {target}")));
    }
}
