use ivy_error::IvyResult;

use crate::compute::ValueSource;
use crate::{Value, Vector};

/// Rotate `source` left by `n` places.
///
/// `n` is taken modulo the length, so negative counts rotate right. An empty source is returned
/// unchanged and a single element collapses to that element; anything longer materializes
/// `[n, len)` followed by `[0, n)`.
pub fn rotate<S: ValueSource>(source: &S, n: i64) -> IvyResult<Value> {
    let len = source.len();
    match len {
        0 => return Ok(source.to_value()),
        1 => return source.get(0),
        _ => {}
    }

    let shift = usize::try_from(n.rem_euclid(i64::try_from(len)?))?;
    (shift..len)
        .chain(0..shift)
        .map(|i| source.get(i))
        .collect::<IvyResult<Vector>>()
        .map(Value::Vector)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_harness::int_view;

    #[rstest]
    #[case(2, [4, 1, 5, 3, 1])]
    #[case(0, [3, 1, 4, 1, 5])]
    #[case(5, [3, 1, 4, 1, 5])]
    #[case(7, [4, 1, 5, 3, 1])]
    #[case(-1, [5, 3, 1, 4, 1])]
    #[case(-12, [1, 5, 3, 1, 4])]
    fn rotates_left(#[case] n: i64, #[case] expected: [i64; 5]) {
        let view = int_view(&[&[3, 1], &[4, 1, 5]]);
        assert_eq!(
            rotate(&view, n).unwrap(),
            Value::Vector(Vector::from_ints(expected))
        );
    }

    #[test]
    fn rotating_back_restores() {
        let vector = Vector::from_ints([3, 1, 4, 1, 5]);
        for n in 1..5 {
            let Value::Vector(rotated) = rotate(&vector, n).unwrap() else {
                panic!("expected a vector");
            };
            assert_eq!(rotate(&rotated, 5 - n).unwrap(), Value::Vector(vector.clone()));
        }
    }

    #[test]
    fn empty_is_unchanged() {
        let view = int_view(&[&[]]);
        assert_eq!(rotate(&view, 3).unwrap(), Value::Column(view));
    }

    #[test]
    fn single_element_collapses_to_scalar() {
        let view = int_view(&[&[], &[42]]);
        assert_eq!(rotate(&view, 3).unwrap(), Value::from(42i64));
    }
}
