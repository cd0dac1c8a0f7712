//! Handlers describing how erased entries are named and formatted.
//!
//! A [`RawEntry`](crate::RawEntry) does not know the type of its value once
//! it has been stored. The [`EntryHandler`] chosen at insertion time is
//! captured in the entry's vtable and used whenever the entry needs to be
//! identified or debug-formatted later on.

/// Describes an entry stored in a [`RawInfoStore`](crate::RawInfoStore).
///
/// The handler is a type-level value: it is never instantiated, only its
/// associated items are used.
///
/// # Examples
///
/// ```
/// use factum_internals::{RawEntry, handlers::EntryHandler};
///
/// struct RetryCount;
///
/// impl EntryHandler<u8> for RetryCount {
///     const NAME: &'static str = "retries";
///
///     fn debug(value: &u8, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(formatter, "{value} retries")
///     }
/// }
///
/// let entry = RawEntry::new::<u8, RetryCount>(3);
/// assert_eq!(entry.name(), "retries");
/// assert_eq!(format!("{entry:?}"), "3 retries");
/// ```
pub trait EntryHandler<V>: 'static {
    /// Human-readable name of the entry, used in debug output.
    const NAME: &'static str;

    /// Formats the value using debug-style formatting.
    fn debug(value: &V, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}
