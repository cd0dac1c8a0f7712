//! Type-erased info store.
//!
//! [`RawInfoStore`] maps a caller-chosen [`TypeId`] to a [`RawEntry`]. The
//! key is the identity of a tag, not of the stored value, so two keys holding
//! values of the same type never collide. At most one entry exists per key and
//! inserting under an existing key replaces the previous entry.

use core::any::TypeId;

use hashbrown::HashMap;

use crate::RawEntry;

/// Storage for the entries, hashed with the Fx hasher.
type EntryMap = HashMap<TypeId, RawEntry, rustc_hash::FxBuildHasher>;

/// A map from [`TypeId`] keys to erased entries.
#[derive(Clone, Default)]
pub struct RawInfoStore {
    /// The entries, keyed by tag identity.
    entries: EntryMap,
}

impl RawInfoStore {
    /// Creates an empty store. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` under `key`, returning the entry it replaced, if any.
    pub fn insert(&mut self, key: TypeId, entry: RawEntry) -> Option<RawEntry> {
        self.entries.insert(key, entry)
    }

    /// Returns the entry stored under `key`.
    #[must_use]
    pub fn get(&self, key: &TypeId) -> Option<&RawEntry> {
        self.entries.get(key)
    }

    /// Returns `true` if an entry is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &TypeId) -> bool {
        self.entries.contains_key(key)
    }

    /// The number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> RawInfoStoreIter<'_> {
        RawInfoStoreIter {
            inner: self.entries.iter(),
        }
    }
}

impl core::fmt::Debug for RawInfoStore {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.values().map(|entry| (entry.name(), entry)))
            .finish()
    }
}

/// Iterator over the entries of a [`RawInfoStore`].
#[must_use]
pub struct RawInfoStoreIter<'a> {
    /// The underlying map iterator.
    inner: hashbrown::hash_map::Iter<'a, TypeId, RawEntry>,
}

impl<'a> Iterator for RawInfoStoreIter<'a> {
    type Item = (TypeId, &'a RawEntry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, entry)| (*key, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RawInfoStoreIter<'_> {}

impl core::iter::FusedIterator for RawInfoStoreIter<'_> {}

impl<'a> IntoIterator for &'a RawInfoStore {
    type IntoIter = RawInfoStoreIter<'a>;
    type Item = (TypeId, &'a RawEntry);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
