use arrow_array::Array;
use arrow_array::cast::AsArray;
use ivy_dtype::{NativePType, PType, match_each_native_ptype};
use ivy_error::{IvyResult, ivy_bail, ivy_err};
use ivy_scalar::PValue;

use crate::Value;

/// Read the raw element at `offset` of a chunk declared as `ptype`.
pub(crate) fn read_pvalue(chunk: &dyn Array, offset: usize, ptype: PType) -> IvyResult<PValue> {
    if chunk.is_null(offset) {
        ivy_bail!("null at offset {} has no value", offset);
    }

    match_each_native_ptype!(ptype, |$T| {
        let array = chunk
            .as_primitive_opt::<<$T as NativePType>::ArrowType>()
            .ok_or_else(|| ivy_err!(MismatchedTypes: ptype, chunk.data_type()))?;
        Ok(PValue::from(array.value(offset)))
    })
}

/// Widen a raw element into the value model.
///
/// Every integer width becomes an exact integer. Floats become a [`ivy_scalar::BigFloat`] with
/// `float_prec` mantissa bits.
pub(crate) fn decode_pvalue(pvalue: PValue, float_prec: u32) -> IvyResult<Value> {
    match pvalue.to_bigint() {
        Some(int) => Ok(Value::Int(int)),
        None => pvalue.to_bigfloat(float_prec).map(Value::Float),
    }
}
