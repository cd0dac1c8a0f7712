//! Integration with the [`tracing`](::tracing) ecosystem.
//!
//! Two things are provided: recording which span an error was raised in, and
//! emitting an error as a `tracing` event.
//!
//! ```
//! use factum::{
//!     Error,
//!     tracing::{SpanExt, SpanName},
//! };
//!
//! #[tracing::instrument]
//! fn connect() -> Result<(), Error> {
//!     Err(Error::new("connection refused", ())).attach_span()
//! }
//!
//! let error = connect().unwrap_err();
//! factum::tracing::emit(&error);
//!
//! // Without a subscriber no span is active, so nothing was recorded.
//! assert!(error.lookup::<SpanName>().is_none());
//! ```

use ::tracing::Span;

use crate::{Error, Tag};

tag! {
    /// Name of the `tracing` span that was active when the error was
    /// raised.
    pub SpanName: &'static str = "span";
}

/// Extension trait recording the current span on errors.
pub trait SpanExt: Sized {
    /// Stores the name of the current span under [`SpanName`].
    ///
    /// Does nothing when no span is active or the span is disabled.
    #[must_use]
    fn attach_span(self) -> Self;
}

impl SpanExt for Error {
    fn attach_span(self) -> Self {
        let span = Span::current();
        match span.metadata() {
            Some(metadata) if !span.is_disabled() => self.with(SpanName::info(metadata.name())),
            _ => self,
        }
    }
}

impl<V> SpanExt for Result<V, Error> {
    fn attach_span(self) -> Self {
        self.map_err(SpanExt::attach_span)
    }
}

/// Emits `error` as an event at the `ERROR` level.
///
/// The message of the event is the message of `error`. The code, the span
/// name and the whole rendered chain are recorded as fields.
pub fn emit(error: &Error) {
    ::tracing::error!(
        code = ?error.code(),
        span = error.lookup::<SpanName>().copied(),
        chain = %error.render(),
        message = error.what(),
    );
}
