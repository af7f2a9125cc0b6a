#![cfg(target_endian = "little")]
#![deny(missing_docs)]

//! The primitive storage types Ivy can decode.
//!
//! A chunked column declares exactly one [`PType`]; every integer width and signedness widens to
//! an exact integer, and both float widths decode to an arbitrary-precision float.

pub use ptype::*;

mod arrow;
mod ptype;
