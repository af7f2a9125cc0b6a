pub use ivy_array::*;
pub use {ivy_dtype as dtype, ivy_error as error, ivy_scalar as scalar};
