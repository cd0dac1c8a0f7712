//! Module containing the erased entry data structure

mod raw;
mod vtable;

pub use self::raw::RawEntry;
