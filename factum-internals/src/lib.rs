#![no_std]
#![forbid(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_docs_in_private_items,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`factum`].
//!
//! # Overview
//!
//! This crate contains the type-erased storage that backs the typed info
//! store of [`factum`] errors. It knows nothing about tags: it stores values
//! of arbitrary types under a [`TypeId`] key chosen by the caller, together
//! with a small vtable that remembers how to format the erased value.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`factum`] crate, not
//! this one.
//!
//! # Architecture
//!
//! - **[`RawEntry`]**: one erased value behind a [`triomphe::Arc`], plus an
//!   `EntryVtable` created for its concrete value type and handler.
//! - **[`RawInfoStore`]**: a map from [`TypeId`] to [`RawEntry`] using
//!   [`hashbrown`] with the [`rustc_hash::FxBuildHasher`].
//! - **[`handlers`]**: the [`EntryHandler`] trait describing how an entry is
//!   named and debug-formatted.
//!
//! Values are shared between clones of a store, so cloning an error is cheap
//! and never requires the stored values to be [`Clone`].
//!
//! [`factum`]: https://docs.rs/factum/latest/factum/
//! [`TypeId`]: core::any::TypeId
//! [`EntryHandler`]: handlers::EntryHandler

extern crate alloc;

mod entry;
pub mod handlers;
mod store;

pub use entry::RawEntry;
pub use store::{RawInfoStore, RawInfoStoreIter};
