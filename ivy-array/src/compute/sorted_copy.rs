use std::cell::Cell;

use ivy_error::IvyResult;
use log::trace;

use crate::compute::sort::stable_sort_by;
use crate::compute::{ValueSource, to_vector};
use crate::{BinaryOp, Comparator, Value, Vector};

/// Materialize `source` sorted ascending under the comparator's `<`.
///
/// Unlike [`grade`](crate::compute::grade), callers must not rely on the relative order of equal
/// elements.
pub fn sorted_copy<S: ValueSource, C: Comparator + ?Sized>(source: &S, cmp: &C) -> IvyResult<Vector> {
    let values = to_vector(source)?.into_inner();
    let len = values.len();
    let comparisons = Cell::new(0usize);
    let sorted = stable_sort_by(values, &mut |a: &Value, b: &Value| {
        comparisons.set(comparisons.get() + 1);
        cmp.compare(a, BinaryOp::Lt, b)
    })?;
    trace!("sorted {} elements with {} comparisons", len, comparisons.get());
    Ok(Vector::new(sorted))
}
