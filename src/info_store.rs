use core::{any::TypeId, fmt, iter::FusedIterator};

use factum_internals::{RawEntry, RawInfoStore, RawInfoStoreIter};

use crate::{Info, Tag, tag::TagHandler};

/// A heterogeneous map from tags to their values.
///
/// Every [`Error`](crate::Error) owns one. The store holds at most one value
/// per tag; inserting a tag that is already present replaces its value. A
/// lookup for the tag `T` only ever returns a value that was inserted as `T`,
/// never one stored under a different tag with the same value type.
///
/// Cloning a store is cheap: the values themselves are shared.
///
/// # Examples
///
/// ```
/// use factum::{InfoStore, Tag, tags::Code};
///
/// let mut store = InfoStore::new();
/// assert!(store.get::<Code>().is_none());
///
/// store.insert(Code::info(1));
/// store.insert(Code::info(2));
/// assert_eq!(store.get::<Code>(), Some(&2));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InfoStore {
    raw: RawInfoStore,
}

impl InfoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: RawInfoStore::new(),
        }
    }

    /// Stores `info` under its tag.
    ///
    /// Returns `true` if a previous value for the same tag was replaced.
    pub fn insert<T: Tag>(&mut self, info: Info<T>) -> bool {
        let entry = RawEntry::new::<T::Value, TagHandler<T>>(info.into_value());
        self.raw.insert(TypeId::of::<T>(), entry).is_some()
    }

    /// Returns the value stored under the tag `T`, if any.
    #[must_use]
    pub fn get<T: Tag>(&self) -> Option<&T::Value> {
        self.raw.get(&TypeId::of::<T>())?.downcast_ref::<T::Value>()
    }

    /// Returns `true` if a value is stored under the tag `T`.
    #[must_use]
    pub fn contains<T: Tag>(&self) -> bool {
        self.raw.contains_key(&TypeId::of::<T>())
    }

    /// The number of facts in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the store holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterates over the facts in the store, in no particular order.
    pub fn iter(&self) -> InfoStoreIter<'_> {
        InfoStoreIter {
            raw: self.raw.iter(),
        }
    }
}

impl fmt::Debug for InfoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<'a> IntoIterator for &'a InfoStore {
    type IntoIter = InfoStoreIter<'a>;
    type Item = InfoRef<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A reference to one fact of an [`InfoStore`] whose tag is not known
/// statically.
#[derive(Copy, Clone)]
pub struct InfoRef<'a> {
    entry: &'a RawEntry,
}

impl<'a> InfoRef<'a> {
    /// The [`Tag::NAME`] of the fact.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.entry.name()
    }

    /// The type name of the value.
    #[must_use]
    pub fn value_type_name(&self) -> &'static str {
        self.entry.value_type_name()
    }

    /// The [`TypeId`] of the value.
    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        self.entry.value_type_id()
    }

    /// Returns `true` if both facts hold the same value, as is the case for
    /// a fact and its counterpart in a cloned store.
    #[must_use]
    pub fn shares_value_with(&self, other: &InfoRef<'_>) -> bool {
        self.entry.shares_value_with(other.entry)
    }

    /// Returns `true` if the fact was stored under the tag `T`.
    #[must_use]
    pub fn is<T: Tag>(&self) -> bool {
        self.entry.handler_type_id() == TypeId::of::<TagHandler<T>>()
    }

    /// Returns the value if the fact was stored under the tag `T`.
    #[must_use]
    pub fn downcast<T: Tag>(&self) -> Option<&'a T::Value> {
        if self.is::<T>() {
            self.entry.downcast_ref::<T::Value>()
        } else {
            None
        }
    }
}

impl fmt::Debug for InfoRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name(), self.entry)
    }
}

/// Iterator over the facts of an [`InfoStore`].
#[must_use]
pub struct InfoStoreIter<'a> {
    raw: RawInfoStoreIter<'a>,
}

impl<'a> Iterator for InfoStoreIter<'a> {
    type Item = InfoRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, entry) = self.raw.next()?;
        Some(InfoRef { entry })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl ExactSizeIterator for InfoStoreIter<'_> {}

impl FusedIterator for InfoStoreIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::{borrow::Cow, format, vec::Vec};

    use super::*;
    use crate::tags::{Code, LineNumber, Message};

    #[test]
    fn test_store_send_sync() {
        static_assertions::assert_impl_all!(InfoStore: Send, Sync, Clone, Default);
        static_assertions::assert_impl_all!(InfoRef<'static>: Send, Sync, Copy);
    }

    #[test]
    fn test_same_value_type_different_tags() {
        let mut store = InfoStore::new();
        store.insert(Code::info(1));
        store.insert(LineNumber::info(2));

        assert_eq!(store.get::<Code>(), Some(&1));
        assert_eq!(store.get::<LineNumber>(), Some(&2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_reports_replacement() {
        let mut store = InfoStore::new();
        assert!(!store.insert(Code::info(1)));
        assert!(store.insert(Code::info(2)));
        assert_eq!(store.get::<Code>(), Some(&2));
    }

    #[test]
    fn test_info_ref_downcast() {
        let mut store = InfoStore::new();
        store.insert(Code::info(0x10));
        store.insert(Message::info(Cow::Borrowed("boom")));

        let code = store.iter().find(|info| info.is::<Code>()).unwrap();
        assert_eq!(code.name(), "code");
        assert_eq!(code.value_type_name(), "u32");
        assert_eq!(code.downcast::<Code>(), Some(&0x10));
        assert!(code.downcast::<LineNumber>().is_none());
        assert_eq!(format!("{code:?}"), "code: 16");

        let mut names: Vec<&str> = store.iter().map(|info| info.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["code", "message"]);
    }

    #[test]
    fn test_clone_shares_values() {
        let mut store = InfoStore::new();
        store.insert(Code::info(1));
        let mut copy = store.clone();
        copy.insert(LineNumber::info(2));

        let original = store.iter().next().unwrap();
        let shared = copy.iter().find(|info| info.is::<Code>()).unwrap();
        let added = copy.iter().find(|info| info.is::<LineNumber>()).unwrap();

        assert_eq!(original.value_type_id(), TypeId::of::<u32>());
        assert_eq!(added.value_type_id(), TypeId::of::<u32>());
        assert!(original.shares_value_with(&shared));
        assert!(!original.shares_value_with(&added));
    }
}
