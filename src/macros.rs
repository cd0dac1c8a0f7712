/// Declares one or more tags.
///
/// Each declaration creates an uninhabited type implementing
/// [`Tag`](crate::Tag) whose value is formatted through its
/// [`Debug`](core::fmt::Debug) implementation. The generated types derive
/// `Clone`, `Copy` and `Debug`.
///
/// # Examples
///
/// ```
/// use factum::prelude::*;
///
/// tag! {
///     /// The request that failed.
///     pub RequestId: u64 = "request";
///
///     /// How long the request ran, in milliseconds.
///     pub(crate) Elapsed: f32 = "elapsed";
/// }
///
/// let error = Error::new("timed out", (RequestId::info(9), Elapsed::info(1500.0)));
/// assert_eq!(error.lookup::<RequestId>(), Some(&9));
/// assert_eq!(RequestId::NAME, "request");
/// ```
#[macro_export]
macro_rules! tag {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident: $value:ty = $label:literal;
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis enum $name {}

        impl $crate::Tag for $name {
            type Value = $value;

            const NAME: &'static str = $label;

            fn debug(
                value: &Self::Value,
                formatter: &mut $crate::__private::fmt::Formatter<'_>,
            ) -> $crate::__private::fmt::Result {
                $crate::__private::fmt::Debug::fmt(value, formatter)
            }
        }
    )+};
}

/// Constructs an [`Error`](crate::Error), recording where it was raised.
///
/// The first form takes a message, the second a `code = ...` and a message.
/// Both accept any number of additional facts.
///
/// Compared to calling [`Error::new`](crate::Error::new) or
/// [`Error::with_code`](crate::Error::with_code) directly, the macro also
/// records the [`FunctionName`](crate::tags::FunctionName) of the enclosing
/// function when site metadata is enabled (see [`config`](crate::config)).
///
/// # Examples
///
/// ```
/// use factum::{prelude::*, tags::Code};
///
/// tag! {
///     pub Attempt: u32 = "attempt";
/// }
///
/// let error = error!("connection refused");
/// assert_eq!(error.what(), "connection refused");
///
/// let error = error!(code = 0x503, "service unavailable", Attempt::info(3));
/// assert_eq!(error.lookup::<Code>(), Some(&0x503));
/// assert_eq!(error.lookup::<Attempt>(), Some(&3));
/// ```
#[macro_export]
macro_rules! error {
    (code = $code:expr, $message:expr $(, $info:expr)* $(,)?) => {
        $crate::__private::attach_function_name(
            $crate::Error::with_code($code, $message, ($($info,)*)),
            $crate::__function_name!(),
        )
    };
    ($message:expr $(, $info:expr)* $(,)?) => {
        $crate::__private::attach_function_name(
            $crate::Error::new($message, ($($info,)*)),
            $crate::__function_name!(),
        )
    };
}

/// Return early with an error.
///
/// Accepts the same arguments as [`error!`] and is equivalent to
/// `return Err(error!(...).into())`.
///
/// # Examples
///
/// ```
/// use factum::prelude::*;
///
/// fn check_depth(depth: u32) -> Result<(), Error> {
///     if depth > 8 {
///         bail!(code = 0x40, "chain too deep");
///     }
///     Ok(())
/// }
///
/// assert!(check_depth(3).is_ok());
/// assert_eq!(check_depth(9).unwrap_err().code(), Some(0x40));
/// ```
#[macro_export]
macro_rules! bail {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::error!($($args)*).into())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __factum_marker() {}
        $crate::__private::strip_marker($crate::__private::type_name_of(__factum_marker))
    }};
}
