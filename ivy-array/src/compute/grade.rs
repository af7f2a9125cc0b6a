use std::cell::Cell;

use ivy_error::IvyResult;
use log::trace;

use crate::compute::sort::stable_sort_by;
use crate::compute::{ValueSource, to_vector};
use crate::{BinaryOp, Comparator, Context, Value, Vector};

/// The permutation that stably sorts `source` ascending, offset by the context's index origin.
///
/// Elements are compared with the context's `<`. Equal elements keep their relative order, so
/// indexing `source` by the result yields a non-decreasing sequence.
pub fn grade<S: ValueSource, C: Context + ?Sized>(source: &S, ctx: &C) -> IvyResult<Vector> {
    let values = to_vector(source)?;
    let comparisons = Cell::new(0usize);
    let order = stable_sort_by(
        (0..values.len()).collect(),
        &mut |a: &usize, b: &usize| {
            comparisons.set(comparisons.get() + 1);
            ctx.compare(&values[*a], BinaryOp::Lt, &values[*b])
        },
    )?;
    trace!(
        "graded {} elements with {} comparisons",
        values.len(),
        comparisons.get()
    );

    let origin = ctx.config().origin();
    Ok(order.into_iter().map(|i| Value::from(i + origin)).collect())
}
