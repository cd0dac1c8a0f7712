//! Commonly used items for convenient importing.
//!
//! ```
//! use factum::prelude::*;
//!
//! tag! {
//!     pub Divisor: i32 = "divisor";
//! }
//!
//! fn divide(a: i32, b: i32) -> Result<i32, Error> {
//!     if b == 0 {
//!         bail!(code = 0x7, "cannot divide by zero", Divisor::info(b));
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert_eq!(divide(1, 0).unwrap_err().lookup::<Divisor>(), Some(&0));
//! ```
//!
//! This prelude includes the [`Error`] type, the [`Tag`] trait together with
//! [`Info`] and [`InfoStore`], the [`ResultExt`] extension trait, the
//! built-in [`tags`], the [`render`] module and the [`error!`], [`bail!`]
//! and [`tag!`] macros.

pub use crate::{
    Error, Info, InfoStore, ResultExt, Tag, bail, error, render, tag, tags,
};
