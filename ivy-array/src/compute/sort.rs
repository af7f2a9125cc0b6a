use ivy_error::IvyResult;

/// Stable merge sort with a fallible comparison.
///
/// `less(a, b)` reports whether `a` orders strictly before `b`. Equal elements keep their input
/// order. The first comparison error aborts the sort.
pub(crate) fn stable_sort_by<T, F>(items: Vec<T>, less: &mut F) -> IvyResult<Vec<T>>
where
    F: FnMut(&T, &T) -> IvyResult<bool>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = stable_sort_by(left, less)?;
    let right = stable_sort_by(right, less)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // Ties take from the left run.
        if less(r, l)? {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}
