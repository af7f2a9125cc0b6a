//! Chunked columns and the read-only views the evaluator holds onto them.

pub use chunked::*;
pub use resolver::*;
pub use view::*;

mod chunked;
mod decode;
mod resolver;
mod view;
