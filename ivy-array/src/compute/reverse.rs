use ivy_error::IvyResult;

use crate::Vector;
use crate::compute::{ValueSource, to_vector};

/// Materialize `source` in reverse order.
pub fn reverse<S: ValueSource>(source: &S) -> IvyResult<Vector> {
    let mut reversed = to_vector(source)?;
    let elems = reversed.as_mut_slice();
    let (mut i, mut j) = (0, elems.len().saturating_sub(1));
    while i < j {
        elems.swap(i, j);
        i += 1;
        j -= 1;
    }
    Ok(reversed)
}
