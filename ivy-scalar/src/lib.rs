#![deny(missing_docs)]

//! Numeric scalars for Ivy.
//!
//! Integer storage types widen to [`num_bigint::BigInt`]; float storage types decode to a
//! [`BigFloat`] whose mantissa precision is chosen by the evaluation context rather than by the
//! storage type. [`PValue`] carries a single raw element between the storage and value layers.

pub use bigfloat::*;
pub use num_bigint::BigInt;
pub use pvalue::*;

mod bigfloat;
mod pvalue;
