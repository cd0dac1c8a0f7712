#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Errors that carry typed facts.
//!
//! ## Overview
//!
//! An [`Error`] holds a human-readable message and an open-ended set of
//! strongly-typed facts: an error code, the source location it was raised
//! at, or anything an application wants to record. Facts are keyed by
//! **tags**, zero-sized types implementing [`Tag`], so any module can define
//! its own facts without the error type knowing about them in advance and
//! every lookup is checked at compile time.
//!
//! Errors can be chained: an [`Error`] may record the error that caused it,
//! and that cause is exposed through [`core::error::Error::source`] like any
//! other Rust error. The [`render`] module walks such a chain and prints the
//! facts of every level.
//!
//! ## Quick Example
//!
//! ```
//! use factum::prelude::*;
//!
//! tag! {
//!     /// The configuration key that could not be parsed.
//!     pub ConfigKey: &'static str = "key";
//! }
//!
//! fn parse_port(raw: &str) -> Result<u16, Error> {
//!     raw.parse::<u16>()
//!         .nest(Error::with_code(0x12, "invalid port", ConfigKey::info("server.port")))
//! }
//!
//! let error = parse_port("eighty").unwrap_err();
//! assert_eq!(error.code(), Some(0x12));
//! assert_eq!(error.what(), "invalid port");
//! assert_eq!(error.lookup::<ConfigKey>(), Some(&"server.port"));
//!
//! let report = error.render().to_string();
//! assert!(report.contains("code : 0x12"));
//! assert!(report.contains("with nested error:"));
//! assert!(report.contains("\twhat : invalid digit found in string"));
//! ```
//!
//! ## Core Concepts
//!
//! - A **tag** is a type implementing [`Tag`]. It names a fact and fixes the
//!   type of its value. Declare tags with the [`tag!`] macro.
//! - The **info store** ([`InfoStore`]) holds at most one value per tag.
//!   Inserting the same tag twice keeps the second value.
//! - The **causal chain** is the sequence of errors reached through
//!   [`source`](core::error::Error::source), starting at the outermost error.
//!   Levels do not have to be [`Error`]s; foreign errors are rendered through
//!   their [`Display`](core::fmt::Display) implementation.
//! - A **render handle** ([`tags::Handle<Render>`](tags::Handle)) is a fact
//!   holding a callback. The renderer invokes it after the built-in fields, so
//!   derived error types can print their own facts.
//!
//! ## Site metadata
//!
//! In debug builds, constructors record the file and line they were called
//! from, and the [`error!`] macro also records the enclosing function. In
//! release builds this metadata is omitted. The behavior can be changed at
//! runtime through the [`config`] module.
//!
//! ## Features
//!
//! - `std`: enables `render::write_io` and uses the standard library's
//!   `RwLock` for the global configuration.
//! - `tracing`: enables the `tracing` module, which records
//!   span names and emits errors as `tracing` events.

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

mod chain;
pub mod config;
mod error;
mod hook_lock;
mod info_store;
mod into_infos;
pub mod prelude;
pub mod render;
mod result_ext;
mod tag;
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing;

pub use self::{
    chain::Chain,
    error::{Error, lookup},
    info_store::{InfoRef, InfoStore, InfoStoreIter},
    into_infos::IntoInfos,
    result_ext::ResultExt,
    tag::{Info, Tag, tags},
};

/// The signature of a render handle.
///
/// A render handle receives the error being rendered, the sink and the
/// current depth in the chain. Use [`render::field`] to write lines with the
/// same indentation as the built-in fields.
pub type Render =
    dyn Fn(&Error, &mut dyn core::fmt::Write, usize) -> core::fmt::Result + Send + Sync;

/// A [`Result`](core::result::Result) type alias where the error defaults to
/// [`Error`].
///
/// # Examples
///
/// ```
/// fn might_fail() -> factum::Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T, E = Error> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::{fmt, result::Result::Err};

    use crate::{Error, Tag, config, tags::FunctionName};

    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn type_name_of<T>(_: T) -> &'static str {
        core::any::type_name::<T>()
    }

    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn strip_marker(name: &'static str) -> &'static str {
        name.strip_suffix("::__factum_marker").unwrap_or(name)
    }

    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn attach_function_name(error: Error, name: &'static str) -> Error {
        if config::site_metadata().attaches() {
            error.with(FunctionName::info(name))
        } else {
            error
        }
    }
}
