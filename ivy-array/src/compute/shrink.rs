use ivy_error::IvyResult;

use crate::Value;
use crate::compute::ValueSource;

/// The sole element of a one-element source, otherwise the source itself.
///
/// Floats collapse like any other element: a single float row shrinks to its float value, even
/// when that value is integral.
pub fn shrink<S: ValueSource>(source: &S) -> IvyResult<Value> {
    if source.len() == 1 {
        return source.get(0);
    }
    Ok(source.to_value())
}
