use ivy_error::IvyResult;

use crate::compute::{ValueSource, contains, sorted_copy};
use crate::{Comparator, Value, Vector};

/// For each element of `u`, `1` if it occurs in `v` and `0` otherwise.
///
/// `v` is sorted once and then searched per element of `u`.
pub fn membership<U, V, C>(cmp: &C, u: &U, v: &V) -> IvyResult<Vector>
where
    U: ValueSource,
    V: ValueSource,
    C: Comparator + ?Sized,
{
    let sorted = sorted_copy(v, cmp)?;
    (0..u.len())
        .map(|i| -> IvyResult<Value> {
            let found = contains(&sorted, cmp, &u.get(i)?)?;
            Ok(Value::from(found))
        })
        .collect()
}
