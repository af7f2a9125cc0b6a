use crate::{ErrString, IvyResult};

/// Extension trait for attaching context to the error of an [`IvyResult`].
pub trait ContextExt<T> {
    /// Wrap the error, if any, with the message produced by `msg`.
    fn with_context<M: Into<ErrString>>(self, msg: impl FnOnce() -> M) -> IvyResult<T>;
}

impl<T> ContextExt<T> for IvyResult<T> {
    fn with_context<M: Into<ErrString>>(self, msg: impl FnOnce() -> M) -> IvyResult<T> {
        self.map_err(|e| e.with_context(msg()))
    }
}
