//! Process-wide settings.
//!
//! The only setting is whether constructors record *site metadata*: the file
//! and line an error was raised at, plus the enclosing function when raised
//! through [`error!`](crate::error!). The default is fixed at build time:
//! debug builds attach the metadata, release builds omit it. A program can
//! override the default at runtime, for example to keep locations in a
//! release build:
//!
//! ```
//! use factum::{Error, config::{self, SiteMetadata}, tags::Filename};
//!
//! let previous = config::set_site_metadata(SiteMetadata::Attach);
//! let error = Error::new("disk full", ());
//! assert_eq!(error.lookup::<Filename>(), Some(&file!()));
//!
//! config::set_site_metadata(SiteMetadata::Omit);
//! let error = Error::new("disk full", ());
//! assert!(error.lookup::<Filename>().is_none());
//!
//! config::set_site_metadata(previous);
//! ```
//!
//! The setting is read when an error is constructed and again when it is
//! rendered: omitted metadata is never printed, and metadata recorded while
//! the setting was enabled is hidden while it is disabled.

use crate::hook_lock::HookLock;

/// Whether errors record and render their construction site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SiteMetadata {
    /// Record the file, line and function of the construction site.
    Attach,
    /// Record nothing about the construction site.
    Omit,
}

impl SiteMetadata {
    /// The build-time default: [`Attach`](Self::Attach) when
    /// `debug_assertions` are enabled, [`Omit`](Self::Omit) otherwise.
    pub const BUILD_DEFAULT: Self = if cfg!(debug_assertions) {
        Self::Attach
    } else {
        Self::Omit
    };

    /// Returns `true` for [`SiteMetadata::Attach`].
    #[must_use]
    pub const fn attaches(self) -> bool {
        matches!(self, Self::Attach)
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::BUILD_DEFAULT
    }
}

static SITE_METADATA: HookLock<SiteMetadata> = HookLock::new(SiteMetadata::BUILD_DEFAULT);

/// The current site metadata setting.
#[must_use]
pub fn site_metadata() -> SiteMetadata {
    SITE_METADATA.get()
}

/// Changes the site metadata setting for the whole process, returning the
/// previous one.
pub fn set_site_metadata(mode: SiteMetadata) -> SiteMetadata {
    SITE_METADATA.replace(mode)
}

/// Restores the build-time default, returning the previous setting.
pub fn reset_site_metadata() -> SiteMetadata {
    SITE_METADATA.replace(SiteMetadata::BUILD_DEFAULT)
}
