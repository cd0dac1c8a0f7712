//! Rendering of causal chains.
//!
//! Each level of a chain is printed as a block of `label : value` lines,
//! indented with one tab per level of nesting:
//!
//! 1. `code : 0x<HEX>`, if the level has a [`Code`].
//! 2. `message : <text>` if the level has a [`Message`], otherwise
//!    `what : <text>` with the level's [`Display`](core::fmt::Display)
//!    output. Levels that are not [`Error`]s always take this form.
//! 3. `filename`, `line` and `function`, when present and site metadata is
//!    enabled (see [`config`](crate::config)).
//! 4. Whatever the level's render handle writes, if it has one.
//! 5. If the level has a source, the line `with nested error:`, followed by
//!    the source rendered one level deeper.
//!
//! ```
//! use factum::Error;
//!
//! # factum::config::set_site_metadata(factum::config::SiteMetadata::Omit);
//! let error = Error::with_code(0x1f, "request failed", ())
//!     .with_cause(Error::new("connection reset", ()));
//!
//! assert_eq!(
//!     error.render().to_string(),
//!     "code : 0x1F\n\
//!      message : request failed\n\
//!      with nested error:\n\
//!      \tmessage : connection reset\n",
//! );
//! ```

use core::fmt;

use crate::{
    Error, Render, config,
    tags::{Code, Filename, FunctionName, Handle, LineNumber, Message},
};

/// The indentation written once per level of nesting.
pub const INDENT: &str = "\t";

/// The line separating a level from its source.
pub const NESTED_MARKER: &str = "with nested error:";

/// Renders `error` and all of its sources into `sink`.
///
/// `sink` may be a `&mut dyn fmt::Write`, so render handles can render a
/// nested error into the sink they were given.
pub fn write<W: fmt::Write + ?Sized>(
    mut sink: &mut W,
    error: &(dyn core::error::Error + 'static),
) -> fmt::Result {
    write_level(&mut sink, error, 0, config::site_metadata().attaches())
}

/// Renders `error` and all of its sources into an [`io::Write`] sink.
///
/// [`io::Write`]: std::io::Write
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn write_io<W: std::io::Write + ?Sized>(
    sink: &mut W,
    error: &(dyn core::error::Error + 'static),
) -> std::io::Result<()> {
    write!(sink, "{}", Rendered::new(error))
}

fn write_level(
    sink: &mut dyn fmt::Write,
    error: &(dyn core::error::Error + 'static),
    depth: usize,
    site_metadata: bool,
) -> fmt::Result {
    match error.downcast_ref::<Error>() {
        Some(factum) => write_fields(sink, factum, depth, site_metadata)?,
        None => field(sink, depth, "what", error)?,
    }

    if let Some(source) = error.source() {
        indent(sink, depth)?;
        writeln!(sink, "{NESTED_MARKER}")?;
        write_level(sink, source, depth + 1, site_metadata)?;
    }
    Ok(())
}

fn write_fields(
    sink: &mut dyn fmt::Write,
    error: &Error,
    depth: usize,
    site_metadata: bool,
) -> fmt::Result {
    if let Some(code) = error.lookup::<Code>() {
        field(sink, depth, "code", format_args!("0x{code:X}"))?;
    }

    match error.lookup::<Message>() {
        Some(message) => field(sink, depth, "message", message)?,
        None => field(sink, depth, "what", error)?,
    }

    if site_metadata {
        if let Some(filename) = error.lookup::<Filename>() {
            field(sink, depth, "filename", filename)?;
        }
        if let Some(line) = error.lookup::<LineNumber>() {
            field(sink, depth, "line", line)?;
        }
        if let Some(function) = error.lookup::<FunctionName>() {
            field(sink, depth, "function", function)?;
        }
    }

    if let Some(render) = error.lookup::<Handle<Render>>() {
        render(error, &mut *sink, depth)?;
    }
    Ok(())
}

/// Writes one `label : value` line at the indentation of `depth`.
///
/// Render handles use this so their lines line up with the built-in ones.
pub fn field(
    sink: &mut dyn fmt::Write,
    depth: usize,
    label: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    indent(sink, depth)?;
    writeln!(sink, "{label} : {value}")
}

/// Writes the indentation of `depth`.
pub fn indent(sink: &mut dyn fmt::Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        sink.write_str(INDENT)?;
    }
    Ok(())
}

/// A chain that renders itself when displayed.
///
/// Returned by [`Error::render`]; formatting it gives the same text as
/// [`write`].
#[derive(Copy, Clone)]
#[must_use]
pub struct Rendered<'a> {
    error: &'a (dyn core::error::Error + 'static),
}

impl<'a> Rendered<'a> {
    /// Wraps `error` for rendering.
    pub fn new(error: &'a (dyn core::error::Error + 'static)) -> Self {
        Self { error }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write(f, self.error)
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::Tag;

    #[test]
    fn test_field_indentation() {
        let mut out = String::new();
        field(&mut out, 0, "code", 1).unwrap();
        field(&mut out, 2, "line", 17).unwrap();
        assert_eq!(out, "code : 1\n\t\tline : 17\n");
    }

    #[test]
    fn test_foreign_level_uses_display() {
        let error = "256".parse::<u8>().unwrap_err();
        let mut out = String::new();
        write_level(&mut out, &error, 1, false).unwrap();
        assert_eq!(out, "\twhat : number too large to fit in target type\n");
    }

    #[test]
    fn test_code_is_upper_hex() {
        let error = Error::with_code(0xbeef, "m", ());
        let mut out = String::new();
        write_level(&mut out, &error, 0, false).unwrap();
        assert_eq!(out, "code : 0xBEEF\nmessage : m\n");
    }

    #[test]
    fn test_write_into_unsized_sink() {
        let error = "256".parse::<u8>().unwrap_err();
        let mut out = String::new();
        let sink: &mut dyn fmt::Write = &mut out;
        write(sink, &error).unwrap();
        assert_eq!(out, "what : number too large to fit in target type\n");
    }

    #[test]
    fn test_handle_renders_foreign_error_through_its_sink() {
        let error = Error::new("m", ()).with_renderer(|_, sink, depth| {
            let detail = "x".parse::<u8>().unwrap_err();
            indent(sink, depth)?;
            write(sink, &detail)
        });
        let mut out = String::new();
        write_level(&mut out, &error, 1, false).unwrap();
        assert_eq!(
            out,
            "\tmessage : m\n\twhat : invalid digit found in string\n"
        );
    }

    #[test]
    fn test_site_metadata_flag_is_honored() {
        let error = Error::new("m", (Filename::info("a.rs"), LineNumber::info(3)));

        let mut hidden = String::new();
        write_level(&mut hidden, &error, 0, false).unwrap();
        assert_eq!(hidden, "message : m\n");

        let mut shown = String::new();
        write_level(&mut shown, &error, 0, true).unwrap();
        assert!(shown.starts_with("message : m\nfilename : "));
        assert!(shown.contains("\nline : "));
    }
}
