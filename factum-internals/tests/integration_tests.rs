//! Integration tests for the factum-internals crate.
//!
//! ## Entry Tests
//! - `test_entry_creation_and_downcast`: creation, naming and typed access
//! - `test_entry_debug_uses_handler`: debug output goes through the handler
//!
//! ## Store Tests
//! - `test_store_insert_and_get`: keyed insertion and retrieval
//! - `test_store_overwrite_returns_previous`: last write wins
//! - `test_store_keys_are_not_value_types`: two keys with the same value type
//! - `test_store_iteration`: iteration visits every entry once
//!
//! ## Memory Management Tests
//! - `test_clone_shares_values`: clones share allocations
//! - `test_drop_exactly_once`: values are dropped once the last clone is gone

use std::{
    any::TypeId,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use factum_internals::{RawEntry, RawInfoStore, handlers::EntryHandler};

// Key types standing in for tags
enum PrimaryKey {}
enum SecondaryKey {}

struct Plain;

impl<V: fmt::Debug + 'static> EntryHandler<V> for Plain {
    const NAME: &'static str = "plain";

    fn debug(value: &V, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(value, formatter)
    }
}

struct Hex;

impl EntryHandler<u32> for Hex {
    const NAME: &'static str = "hex";

    fn debug(value: &u32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "0x{value:X}")
    }
}

struct DropCounter(Arc<AtomicUsize>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

struct Opaque;

impl EntryHandler<DropCounter> for Opaque {
    const NAME: &'static str = "counter";

    fn debug(_value: &DropCounter, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<counter>")
    }
}

#[test]
fn test_entry_creation_and_downcast() {
    let entry = RawEntry::new::<u32, Hex>(255);

    assert_eq!(entry.name(), "hex");
    assert_eq!(entry.value_type_id(), TypeId::of::<u32>());
    assert_eq!(entry.value_type_name(), "u32");
    assert_eq!(entry.handler_type_id(), TypeId::of::<Hex>());
    assert_eq!(entry.downcast_ref::<u32>(), Some(&255));
    assert!(entry.downcast_ref::<i32>().is_none());
    assert!(entry.downcast_ref::<u64>().is_none());
}

#[test]
fn test_entry_debug_uses_handler() {
    let hex = RawEntry::new::<u32, Hex>(0xbeef);
    let plain = RawEntry::new::<u32, Plain>(0xbeef);
    let text = RawEntry::new::<String, Plain>("boom".to_owned());

    assert_eq!(format!("{hex:?}"), "0xBEEF");
    assert_eq!(format!("{plain:?}"), "48879");
    assert_eq!(format!("{text:?}"), "\"boom\"");
}

#[test]
fn test_store_insert_and_get() {
    let mut store = RawInfoStore::new();
    assert!(store.is_empty());

    assert!(
        store
            .insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(1))
            .is_none()
    );

    assert_eq!(store.len(), 1);
    assert!(store.contains_key(&TypeId::of::<PrimaryKey>()));
    assert!(!store.contains_key(&TypeId::of::<SecondaryKey>()));

    let entry = store.get(&TypeId::of::<PrimaryKey>()).unwrap();
    assert_eq!(entry.downcast_ref::<u32>(), Some(&1));
    assert!(store.get(&TypeId::of::<SecondaryKey>()).is_none());
}

#[test]
fn test_store_overwrite_returns_previous() {
    let mut store = RawInfoStore::new();
    store.insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(1));

    let previous = store
        .insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(2))
        .unwrap();

    assert_eq!(previous.downcast_ref::<u32>(), Some(&1));
    assert_eq!(store.len(), 1);
    assert_eq!(
        store
            .get(&TypeId::of::<PrimaryKey>())
            .and_then(|entry| entry.downcast_ref::<u32>()),
        Some(&2)
    );
}

#[test]
fn test_store_keys_are_not_value_types() {
    let mut store = RawInfoStore::new();
    store.insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(1));
    store.insert(TypeId::of::<SecondaryKey>(), RawEntry::new::<u32, Plain>(2));

    assert_eq!(store.len(), 2);
    let primary = store.get(&TypeId::of::<PrimaryKey>()).unwrap();
    let secondary = store.get(&TypeId::of::<SecondaryKey>()).unwrap();
    assert_eq!(primary.downcast_ref::<u32>(), Some(&1));
    assert_eq!(secondary.downcast_ref::<u32>(), Some(&2));
    assert!(store.get(&TypeId::of::<u32>()).is_none());
}

#[test]
fn test_store_iteration() {
    let mut store = RawInfoStore::new();
    store.insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(1));
    store.insert(
        TypeId::of::<SecondaryKey>(),
        RawEntry::new::<String, Plain>("two".to_owned()),
    );

    let mut names: Vec<&str> = store.iter().map(|(_, entry)| entry.name()).collect();
    names.sort_unstable();
    assert_eq!(names, ["hex", "plain"]);
    assert_eq!(store.iter().len(), 2);

    let keys: Vec<TypeId> = (&store).into_iter().map(|(key, _)| key).collect();
    assert!(keys.contains(&TypeId::of::<PrimaryKey>()));
    assert!(keys.contains(&TypeId::of::<SecondaryKey>()));

    let debug = format!("{store:?}");
    assert!(debug.contains("\"hex\": 0x1"));
    assert!(debug.contains("\"plain\": \"two\""));
}

#[test]
fn test_clone_shares_values() {
    let mut store = RawInfoStore::new();
    store.insert(TypeId::of::<PrimaryKey>(), RawEntry::new::<u32, Hex>(7));

    let copy = store.clone();
    let original_entry = store.get(&TypeId::of::<PrimaryKey>()).unwrap();
    let copied_entry = copy.get(&TypeId::of::<PrimaryKey>()).unwrap();
    assert!(original_entry.shares_value_with(copied_entry));

    let unrelated = RawEntry::new::<u32, Hex>(7);
    assert!(!original_entry.shares_value_with(&unrelated));
}

#[test]
fn test_drop_exactly_once() {
    let drops = Arc::new(AtomicUsize::new(0));

    let mut store = RawInfoStore::new();
    store.insert(
        TypeId::of::<PrimaryKey>(),
        RawEntry::new::<DropCounter, Opaque>(DropCounter(drops.clone())),
    );
    let first_clone = store.clone();
    let second_clone = first_clone.clone();

    drop(store);
    drop(first_clone);
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    assert_eq!(format!("{second_clone:?}"), "{\"counter\": <counter>}");
    drop(second_clone);
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    // Overwriting releases the replaced value immediately.
    let mut store = RawInfoStore::new();
    store.insert(
        TypeId::of::<PrimaryKey>(),
        RawEntry::new::<DropCounter, Opaque>(DropCounter(drops.clone())),
    );
    store.insert(
        TypeId::of::<PrimaryKey>(),
        RawEntry::new::<DropCounter, Opaque>(DropCounter(drops.clone())),
    );
    assert_eq!(drops.load(Ordering::SeqCst), 2);
    drop(store);
    assert_eq!(drops.load(Ordering::SeqCst), 3);
}
