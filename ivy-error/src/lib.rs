#![deny(missing_docs)]

//! This crate defines error & result types for Ivy.
//! It also contains a variety of useful macros for error handling.
//!
//! Errors fall into the three families the vector layer reports to its evaluator: range errors
//! ([`IvyError::OutOfBounds`], [`IvyError::InvalidRange`]), unsupported type errors
//! ([`IvyError::UnsupportedType`]) and conversion errors ([`IvyError::Conversion`]). Everything
//! else is an argument or storage error.

mod ext;

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::num::TryFromIntError;
use std::ops::Deref;

pub use ext::*;

/// A string that can be used as an error message.
#[derive(Debug)]
pub struct ErrString(Cow<'static, str>);

impl<T> From<T> for ErrString
where
    T: Into<Cow<'static, str>>,
{
    fn from(msg: T) -> Self {
        Self(msg.into())
    }
}

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

// Aliased so the `thiserror` derive does not emit the nightly-only `Error::provide` method.
type CapturedBacktrace = Backtrace;

/// The top-level error type for Ivy.
#[derive(thiserror::Error)]
#[non_exhaustive]
pub enum IvyError {
    /// A single index lies outside `[start, stop)`.
    #[error("index {0} out of bounds from {1} to {2}\nBacktrace:\n{3}")]
    OutOfBounds(usize, usize, usize, CapturedBacktrace),
    /// A range `[begin, end)` does not fit a sequence of the given length.
    #[error("invalid range [{0}, {1}) for length {2}\nBacktrace:\n{3}")]
    InvalidRange(usize, usize, usize, CapturedBacktrace),
    /// No decode or encode mapping exists for a storage type.
    #[error("unsupported type: {0}\nBacktrace:\n{1}")]
    UnsupportedType(ErrString, CapturedBacktrace),
    /// A value cannot be converted into the requested representation.
    #[error("cannot convert: {0}\nBacktrace:\n{1}")]
    Conversion(ErrString, CapturedBacktrace),
    /// A type did not match the declared type.
    #[error("expected type: {0} but instead got {1}\nBacktrace:\n{2}")]
    MismatchedTypes(ErrString, ErrString, CapturedBacktrace),
    /// An invalid argument was provided.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidArgument(ErrString, CapturedBacktrace),
    /// A wrapper for errors from the Arrow library.
    #[error("{0}\nBacktrace:\n{1}")]
    ArrowError(arrow_schema::ArrowError, CapturedBacktrace),
    /// A wrapper for integer conversion errors.
    #[error("{0}\nBacktrace:\n{1}")]
    TryFromInt(TryFromIntError, CapturedBacktrace),
    /// An error annotated with additional context.
    #[error("{0}: {1}")]
    Context(ErrString, #[source] Box<IvyError>),
}

impl IvyError {
    /// Adds additional context to an error.
    pub fn with_context<T: Into<ErrString>>(self, msg: T) -> Self {
        IvyError::Context(msg.into(), Box::new(self))
    }

    /// Returns the innermost error, skipping any added context.
    pub fn root(&self) -> &IvyError {
        match self {
            IvyError::Context(_, inner) => inner.root(),
            other => other,
        }
    }

    /// Whether this error reports bad index or slice bounds.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self.root(),
            IvyError::OutOfBounds(..) | IvyError::InvalidRange(..)
        )
    }

    /// Whether this error reports a storage type without a value mapping.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.root(), IvyError::UnsupportedType(..))
    }

    /// Whether this error reports an impossible conversion.
    pub fn is_conversion(&self) -> bool {
        matches!(self.root(), IvyError::Conversion(..))
    }
}

impl Debug for IvyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<arrow_schema::ArrowError> for IvyError {
    fn from(value: arrow_schema::ArrowError) -> Self {
        IvyError::ArrowError(value, Backtrace::capture())
    }
}

impl From<TryFromIntError> for IvyError {
    fn from(value: TryFromIntError) -> Self {
        IvyError::TryFromInt(value, Backtrace::capture())
    }
}

/// A type alias for Results that return IvyErrors as their error type.
pub type IvyResult<T> = Result<T, IvyError>;

/// A trait for unwrapping an IvyResult or an Option whose success an invariant guarantees.
pub trait IvyExpect {
    /// The type of the value being expected.
    type Output;

    /// Returns the value, or panics with the given message and the underlying error.
    fn ivy_expect(self, msg: &str) -> Self::Output;
}

impl<T, E> IvyExpect for Result<T, E>
where
    E: Into<IvyError>,
{
    type Output = T;

    #[inline(always)]
    fn ivy_expect(self, msg: &str) -> Self::Output {
        self.map_err(|err| err.into())
            .unwrap_or_else(|e| ivy_panic!(e.with_context(msg.to_string())))
    }
}

impl<T> IvyExpect for Option<T> {
    type Output = T;

    #[inline(always)]
    fn ivy_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|| {
            let err = IvyError::InvalidArgument(msg.to_string().into(), Backtrace::capture());
            ivy_panic!(err)
        })
    }
}

/// A convenient macro for creating an IvyError.
#[macro_export]
macro_rules! ivy_err {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::IvyError::OutOfBounds($idx, $start, $stop, Backtrace::capture())
        )
    }};
    (InvalidRange: $begin:expr, $end:expr, $len:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::IvyError::InvalidRange($begin, $end, $len, Backtrace::capture())
        )
    }};
    (MismatchedTypes: $expected:expr, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::IvyError::MismatchedTypes(
                $expected.to_string().into(),
                $actual.to_string().into(),
                Backtrace::capture(),
            )
        )
    }};
    (Context: $msg:literal, $err:expr) => {{
        $crate::__private::must_use(
            $crate::IvyError::Context($msg.into(), Box::new($err))
        )
    }};
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::IvyError::$variant(format!($fmt, $($arg),*).into(), Backtrace::capture())
        )
    }};
    (UnsupportedType: $dtype:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::IvyError::UnsupportedType($dtype.to_string().into(), Backtrace::capture())
        )
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ivy_err!(InvalidArgument: $fmt, $($arg),*)
    };
}

/// A convenient macro for returning an IvyError.
#[macro_export]
macro_rules! ivy_bail {
    ($($tt:tt)+) => {
        return Err($crate::ivy_err!($($tt)+))
    };
}

/// A convenient macro for panicking with an IvyError in the presence of a programmer error
/// (e.g., an invariant has been violated).
#[macro_export]
macro_rules! ivy_panic {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        $crate::ivy_panic!($crate::ivy_err!(OutOfBounds: $idx, $start, $stop))
    }};
    ($variant:ident: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ivy_panic!($crate::ivy_err!($variant: $fmt, $($arg),*))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ivy_panic!($crate::ivy_err!($fmt, $($arg),*))
    };
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let err: $crate::IvyError = $err;
        $crate::ivy_panic!(err.with_context(format!($fmt, $($arg),*)))
    }};
    ($err:expr) => {{
        let err: $crate::IvyError = $err;
        #[allow(clippy::panic)]
        {
            panic!("{}", err)
        };
    }};
}

#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    pub const fn must_use(error: crate::IvyError) -> crate::IvyError {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice_bounds(begin: usize, end: usize, len: usize) -> IvyResult<()> {
        if end > len || begin > end {
            ivy_bail!(InvalidRange: begin, end, len);
        }
        Ok(())
    }

    #[test]
    fn classifies_range_errors() {
        let err = slice_bounds(3, 2, 5).unwrap_err();
        assert!(err.is_range_error());
        assert!(!err.is_conversion());
        assert!(ivy_err!(OutOfBounds: 7, 0, 5).is_range_error());
    }

    #[test]
    fn classification_sees_through_context() {
        let err = ivy_err!(Conversion: "cannot convert {} to {}", "column", "char")
            .with_context("while coercing");
        assert!(err.is_conversion());
        assert!(err.to_string().starts_with("while coercing: cannot convert: cannot convert column to char"));
    }

    #[test]
    fn unsupported_type_from_display() {
        let err = ivy_err!(UnsupportedType: arrow_schema::DataType::Utf8);
        assert!(err.is_unsupported_type());
        assert!(err.to_string().contains("Utf8"));
    }

    #[test]
    fn bare_literal_is_invalid_argument() {
        let err = ivy_err!("origin must be 0 or 1, got {}", 3);
        assert!(matches!(err, IvyError::InvalidArgument(..)));
        assert!(err.to_string().starts_with("origin must be 0 or 1, got 3"));
    }

    #[test]
    #[should_panic(expected = "chunk offsets are never empty")]
    fn expect_on_none_panics_with_message() {
        let missing: Option<usize> = None;
        missing.ivy_expect("chunk offsets are never empty");
    }
}
