//! Owned, type-erased entry.
//!
//! A [`RawEntry`] pairs a shared, erased value with the vtable that was built
//! for its concrete type. The value lives behind a [`triomphe::Arc`] so that
//! cloning an entry (and therefore cloning a whole store) only bumps a
//! reference count.

use core::any::{Any, TypeId};

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{entry::vtable::EntryVtable, handlers::EntryHandler};

/// Object-safe bound for stored values.
///
/// Exists so the value can be unsized into a single trait object that is both
/// [`Any`] and thread-safe.
trait ErasedValue: Any + Send + Sync {}

impl<T: Any + Send + Sync> ErasedValue for T {}

/// A type-erased value together with its vtable.
#[derive(Clone)]
pub struct RawEntry {
    /// The erased value.
    value: Arc<dyn ErasedValue>,
    /// Vtable created for the concrete value type and handler.
    vtable: &'static EntryVtable,
}

impl RawEntry {
    /// Creates a new [`RawEntry`] holding `value`, described by the handler
    /// `H`.
    #[must_use]
    pub fn new<V, H>(value: V) -> Self
    where
        V: Any + Send + Sync,
        H: EntryHandler<V>,
    {
        let value: Arc<V> = Arc::new(value);
        Self {
            value: value.unsize(unsize::Coercion!(to dyn ErasedValue)),
            vtable: EntryVtable::new::<V, H>(),
        }
    }

    /// Returns the erased value as [`Any`].
    #[inline]
    fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    /// The [`EntryHandler::NAME`] of the handler used to create this entry.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.vtable.name()
    }

    /// Returns the [`TypeId`] of the stored value.
    #[inline]
    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// Returns the type name of the stored value.
    #[inline]
    #[must_use]
    pub fn value_type_name(&self) -> &'static str {
        self.vtable.value_type_name()
    }

    /// Returns the [`TypeId`] of the handler used to create this entry.
    #[inline]
    #[must_use]
    pub fn handler_type_id(&self) -> TypeId {
        self.vtable.handler_type_id()
    }

    /// Returns a reference to the stored value if it is of type `V`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }

    /// Returns `true` if both entries share the same allocation.
    #[inline]
    #[must_use]
    pub fn shares_value_with(&self, other: &RawEntry) -> bool {
        core::ptr::addr_eq(
            core::ptr::from_ref(self.as_any()),
            core::ptr::from_ref(other.as_any()),
        )
    }
}

impl core::fmt::Debug for RawEntry {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.vtable.debug(self.as_any(), formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_send_sync() {
        static_assertions::assert_impl_all!(RawEntry: Send, Sync, Clone);
    }
}
