use alloc::{borrow::Cow, boxed::Box};
use core::{fmt, panic::Location};

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{
    Chain, Info, InfoStore, IntoInfos, Render, Tag, config,
    render::Rendered,
    tags::{Code, Filename, Handle, LineNumber, Message},
};

/// Object-safe bound for causes, so they can be shared behind one
/// [`Arc`].
trait Cause: core::error::Error + Send + Sync + 'static {}

impl<E: core::error::Error + Send + Sync + 'static> Cause for E {}

/// An error carrying a message and a set of typed facts, optionally caused
/// by another error.
///
/// Every `Error` holds a [`Message`] and, when created with
/// [`Error::with_code`], a [`Code`]. Any other fact can be stored under its
/// own [`Tag`]. Facts are only ever looked up on the level they were stored
/// on; to search the whole chain, iterate over [`Error::chain`].
///
/// Cloning an `Error` is cheap: the facts and the cause are shared, and
/// facts added to the clone are not visible on the original.
///
/// # Examples
///
/// ```
/// use factum::{Error, tags::Code};
///
/// let io = Error::with_code(0x2, "read failed", ());
/// let error = Error::new("could not load settings", ()).with_cause(io);
///
/// assert_eq!(error.to_string(), "could not load settings");
/// assert_eq!(error.code(), None);
/// assert_eq!(error.chain().count(), 2);
/// assert_eq!(factum::lookup::<Code>(error.root_cause()), Some(&0x2));
/// ```
#[derive(Clone)]
pub struct Error {
    infos: InfoStore,
    cause: Option<Arc<dyn Cause>>,
}

impl Error {
    /// Creates an error with the given message and extra facts.
    ///
    /// When site metadata is enabled (see [`config`](crate::config)), the
    /// file and line of the caller are recorded as well.
    #[track_caller]
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>, extras: impl IntoInfos) -> Self {
        Self::build(None, message.into(), extras)
    }

    /// Creates an error with the given code, message and extra facts.
    ///
    /// The code is stored before the message, and the extras after both, so
    /// an extra [`Code`] or [`Message`] replaces the argument.
    #[track_caller]
    #[must_use]
    pub fn with_code(
        code: u32,
        message: impl Into<Cow<'static, str>>,
        extras: impl IntoInfos,
    ) -> Self {
        Self::build(Some(code), message.into(), extras)
    }

    #[track_caller]
    fn build(code: Option<u32>, message: Cow<'static, str>, extras: impl IntoInfos) -> Self {
        let mut infos = InfoStore::new();
        if let Some(code) = code {
            infos.insert(Code::info(code));
        }
        infos.insert(Message::info(message));
        extras.insert_into(&mut infos);

        if config::site_metadata().attaches() {
            let location = Location::caller();
            infos.insert(Filename::info(location.file()));
            infos.insert(LineNumber::info(location.line()));
        }

        Self { infos, cause: None }
    }

    /// Adds a fact, replacing any previous value of the same tag.
    #[must_use]
    pub fn with<T: Tag>(mut self, info: Info<T>) -> Self {
        self.infos.insert(info);
        self
    }

    /// Adds a fact in place, replacing any previous value of the same tag.
    ///
    /// Returns `true` if a previous value was replaced.
    pub fn insert<T: Tag>(&mut self, info: Info<T>) -> bool {
        self.infos.insert(info)
    }

    /// Registers a render handle.
    ///
    /// The renderer calls `render` for this level after printing the
    /// built-in fields. A derived error type uses this to print facts the
    /// renderer does not know about.
    ///
    /// # Examples
    ///
    /// ```
    /// use factum::{Error, Tag, render};
    ///
    /// factum::tag! {
    ///     pub Retries: u8 = "retries";
    /// }
    ///
    /// let error = Error::new("gave up", Retries::info(3)).with_renderer(|error, sink, depth| {
    ///     match error.lookup::<Retries>() {
    ///         Some(retries) => render::field(sink, depth, "retries", retries),
    ///         None => Ok(()),
    ///     }
    /// });
    ///
    /// assert!(error.render().to_string().contains("retries : 3\n"));
    /// ```
    #[must_use]
    pub fn with_renderer<F>(self, render: F) -> Self
    where
        F: Fn(&Error, &mut dyn fmt::Write, usize) -> fmt::Result + Send + Sync + 'static,
    {
        let render: Box<Render> = Box::new(render);
        self.with(Handle::<Render>::info(render))
    }

    /// Records `cause` as the error that led to this one, replacing any
    /// previous cause.
    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause).unsize(unsize::Coercion!(to dyn Cause)));
        self
    }

    /// Like [`with_cause`](Self::with_cause), for causes that are already
    /// boxed.
    #[must_use]
    pub fn with_boxed_cause(self, cause: Box<dyn core::error::Error + Send + Sync>) -> Self {
        self.with_cause(BoxedCause(cause))
    }

    /// Returns the value stored under the tag `T` on this level.
    #[must_use]
    pub fn lookup<T: Tag>(&self) -> Option<&T::Value> {
        self.infos.get::<T>()
    }

    /// All facts stored on this level.
    #[must_use]
    pub fn infos(&self) -> &InfoStore {
        &self.infos
    }

    /// The message of this error.
    #[must_use]
    pub fn what(&self) -> &str {
        match self.infos.get::<Message>() {
            Some(message) => message,
            None => "",
        }
    }

    /// The error code, if one was given.
    #[must_use]
    pub fn code(&self) -> Option<u32> {
        self.infos.get::<Code>().copied()
    }

    /// The error that caused this one, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn core::error::Error + 'static)> {
        let cause: &(dyn core::error::Error + 'static) = &**self.cause.as_ref()?;
        match cause.downcast_ref::<BoxedCause>() {
            Some(boxed) => Some(&*boxed.0),
            None => Some(cause),
        }
    }

    /// Iterates over this error and all of its causes, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost error of the chain. This is `self` when there is no
    /// cause.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn core::error::Error + 'static) {
        self.chain().last().unwrap_or(self)
    }

    /// Renders the whole chain.
    ///
    /// The returned value implements [`Display`](core::fmt::Display); see
    /// the [`render`](crate::render) module for the format.
    pub fn render(&self) -> Rendered<'_> {
        Rendered::new(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.what())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write(f, self)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause()
    }
}

/// Looks up the tag `T` on any error.
///
/// Returns `None` when `error` is not an [`Error`] or holds no value for
/// `T`. Only `error` itself is consulted, not its sources.
///
/// # Examples
///
/// ```
/// use factum::{Error, tags::Code};
///
/// let error = Error::with_code(7, "failed", ());
/// let dyn_error: &(dyn core::error::Error + 'static) = &error;
/// assert_eq!(factum::lookup::<Code>(dyn_error), Some(&7));
///
/// let parse_error = "x".parse::<u8>().unwrap_err();
/// assert_eq!(factum::lookup::<Code>(&parse_error), None);
/// ```
#[must_use]
pub fn lookup<'a, T: Tag>(
    error: &'a (dyn core::error::Error + 'static),
) -> Option<&'a T::Value> {
    error.downcast_ref::<Error>()?.lookup::<T>()
}

/// Holds a boxed cause. Never exposed: [`Error::cause`] returns the inner
/// error.
struct BoxedCause(Box<dyn core::error::Error + Send + Sync>);

impl fmt::Debug for BoxedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for BoxedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl core::error::Error for BoxedCause {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.0.source()
    }
}
