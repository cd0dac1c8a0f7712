//! Tags and the facts they key.

use core::{fmt, marker::PhantomData};

use factum_internals::handlers::EntryHandler;

/// A compile-time identity for a fact stored on an [`Error`](crate::Error).
///
/// A tag pairs a name with the type of its value. Tags are usually declared
/// with the [`tag!`](crate::tag!) macro as uninhabited types; they are never
/// instantiated, only used as type parameters. Two tags are different facts
/// even when their values have the same type.
///
/// # Examples
///
/// Implementing the trait by hand allows a custom debug representation:
///
/// ```
/// use factum::{Error, Tag};
///
/// enum Password {}
///
/// impl Tag for Password {
///     type Value = String;
///     const NAME: &'static str = "password";
///
///     fn debug(_value: &String, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("<redacted>")
///     }
/// }
///
/// let error = Error::new("login failed", Password::info("hunter2".to_owned()));
/// assert_eq!(error.lookup::<Password>().map(String::as_str), Some("hunter2"));
/// assert!(format!("{:?}", error.infos()).contains("<redacted>"));
/// ```
pub trait Tag: 'static {
    /// The type of the value stored under this tag.
    type Value: Send + Sync + 'static;

    /// Name of the fact, used as its label when rendered.
    const NAME: &'static str;

    /// Formats a value of this tag for debug output.
    ///
    /// The default implementation only names the value type.
    fn debug(_value: &Self::Value, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "An object of type {}",
            core::any::type_name::<Self::Value>()
        )
    }

    /// Creates the fact `value` for this tag.
    #[must_use]
    fn info(value: Self::Value) -> Info<Self>
    where
        Self: Sized,
    {
        Info::new(value)
    }
}

/// A single fact: a value together with the tag it is stored under.
///
/// This is the unit passed to error constructors and to
/// [`Error::with`](crate::Error::with).
pub struct Info<T: Tag> {
    value: T::Value,
}

impl<T: Tag> Info<T> {
    /// Creates a new fact for the tag `T`.
    #[must_use]
    pub fn new(value: T::Value) -> Self {
        Self { value }
    }

    /// Returns a reference to the value.
    #[must_use]
    pub fn value(&self) -> &T::Value {
        &self.value
    }

    /// Returns the value.
    #[must_use]
    pub fn into_value(self) -> T::Value {
        self.value
    }
}

impl<T: Tag> fmt::Debug for Info<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", T::NAME)?;
        T::debug(&self.value, f)
    }
}

/// Entry handler that forwards to the [`Tag`] implementation of `T`.
#[allow(dead_code, reason = "only used at the type level")]
pub(crate) struct TagHandler<T>(PhantomData<T>);

impl<T: Tag> EntryHandler<T::Value> for TagHandler<T> {
    const NAME: &'static str = T::NAME;

    fn debug(value: &T::Value, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::debug(value, formatter)
    }
}

/// Tags understood by the renderer.
pub mod tags {
    use alloc::{borrow::Cow, boxed::Box};
    use core::{convert::Infallible, fmt, marker::PhantomData};

    use crate::Tag;

    tag! {
        /// An unsigned error code. Rendered in upper-case hexadecimal.
        pub Code: u32 = "code";

        /// The human-readable message. Every [`Error`](crate::Error) has one.
        pub Message: Cow<'static, str> = "message";

        /// The file the error was constructed in.
        pub Filename: &'static str = "filename";

        /// The line the error was constructed at.
        pub LineNumber: u32 = "line";

        /// The function the error was constructed in. Only recorded by the
        /// [`error!`](crate::error!) macro.
        pub FunctionName: &'static str = "function";
    }

    /// A callable with the signature `F`.
    ///
    /// `Handle<`[`Render`](crate::Render)`>` is the render hook: when
    /// present, the renderer calls it after printing the built-in fields of
    /// an error.
    pub struct Handle<F: ?Sized>(Infallible, PhantomData<F>);

    impl<F> Tag for Handle<F>
    where
        F: ?Sized + Send + Sync + 'static,
    {
        type Value = Box<F>;

        const NAME: &'static str = "handle";

        fn debug(_value: &Box<F>, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "<handle {}>", core::any::type_name::<F>())
        }
    }
}
