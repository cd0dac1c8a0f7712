//! Extension methods for chaining errors out of a [`Result`].

use crate::Error;

mod sealed_result {
    pub trait Sealed {}

    impl<V, E> Sealed for Result<V, E> {}
}

/// Extension trait turning the error of a failed [`Result`] into the cause
/// of a new [`Error`].
///
/// This trait is sealed and implemented for every `Result` whose error type
/// implements [`core::error::Error`].
///
/// # Examples
///
/// ```
/// use factum::prelude::*;
///
/// fn parse_timeout(raw: &str) -> Result<u64, Error> {
///     raw.parse::<u64>().nest(Error::with_code(0x21, "invalid timeout", ()))
/// }
///
/// let error = parse_timeout("soon").unwrap_err();
/// assert_eq!(error.what(), "invalid timeout");
/// assert_eq!(
///     error.cause().map(|cause| cause.to_string()).as_deref(),
///     Some("invalid digit found in string"),
/// );
/// ```
pub trait ResultExt<V, E>: sealed_result::Sealed {
    /// Records the error of `self` as the cause of `error`.
    ///
    /// `error` is built even when `self` is `Ok`; use
    /// [`nest_lazy`](Self::nest_lazy) when that is expensive.
    fn nest(self, error: Error) -> Result<V, Error>;

    /// Like [`nest`](Self::nest), but only builds the error on failure.
    fn nest_lazy<F>(self, error: F) -> Result<V, Error>
    where
        F: FnOnce() -> Error;
}

impl<V, E> ResultExt<V, E> for Result<V, E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn nest(self, error: Error) -> Result<V, Error> {
        self.map_err(|cause| error.with_cause(cause))
    }

    #[inline]
    fn nest_lazy<F>(self, error: F) -> Result<V, Error>
    where
        F: FnOnce() -> Error,
    {
        self.map_err(|cause| error().with_cause(cause))
    }
}
