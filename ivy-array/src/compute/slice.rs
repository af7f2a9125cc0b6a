use ivy_error::{IvyResult, ivy_bail};

use crate::compute::ValueSource;

/// Return the elements `[begin, end)` of `source`.
///
/// Column views are sliced without copying: the result shares chunk storage with its parent.
///
/// # Errors
///
/// Fails with a range error when `end > len` or `begin > end`. Bounds are never clamped.
pub fn slice<S: ValueSource>(source: &S, begin: usize, end: usize) -> IvyResult<S> {
    if end > source.len() || begin > end {
        ivy_bail!(InvalidRange: begin, end, source.len());
    }
    source.slice_unchecked(begin, end)
}
