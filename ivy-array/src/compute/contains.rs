use ivy_error::IvyResult;

use crate::compute::ValueSource;
use crate::{BinaryOp, Comparator, Value};

/// Whether `x` occurs in `source`, which must already be sorted ascending.
///
/// Binary search for the first element `>= x`, then test it for `==`. On unsorted input the
/// answer is unspecified; sort with [`sorted_copy`](crate::compute::sorted_copy) first.
pub fn contains<S: ValueSource, C: Comparator + ?Sized>(
    source: &S,
    cmp: &C,
    x: &Value,
) -> IvyResult<bool> {
    let (mut lo, mut hi) = (0, source.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp.compare(&source.get(mid)?, BinaryOp::Ge, x)? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    if lo == source.len() {
        return Ok(false);
    }
    cmp.compare(&source.get(lo)?, BinaryOp::Eq, x)
}
