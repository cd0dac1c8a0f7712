//! Vtable for type-erased entry operations.
//!
//! This module contains the [`EntryVtable`] which enables calling handler
//! methods on entries whose concrete value type `V` and handler type `H` have
//! been erased. The vtable stores function pointers that dispatch to the
//! correct typed implementations.
//!
//! Vtables are created as `&'static` references via [`EntryVtable::new`],
//! which pairs the function pointers with specific types `V` and `H` at
//! compile time. Dispatch goes through [`Any::downcast_ref`], so a vtable
//! paired with the wrong value can only fail to format, never misread it.

use core::any::{Any, TypeId};

use crate::handlers::EntryHandler;

/// Vtable for type-erased entry operations.
pub(crate) struct EntryVtable {
    /// The [`EntryHandler::NAME`] of the handler used to create this vtable.
    name: &'static str,
    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`EntryVtable`].
    handler_type_id: fn() -> TypeId,
    /// Gets the type name of the value type.
    value_type_name: fn() -> &'static str,
    /// Formats the value using the `debug` method on the handler.
    debug: fn(&dyn Any, &mut core::fmt::Formatter<'_>) -> core::fmt::Result,
}

impl EntryVtable {
    /// Creates a new [`EntryVtable`] for the value type `V` and the handler
    /// type `H`.
    pub(super) const fn new<V: 'static, H: EntryHandler<V>>() -> &'static Self {
        const {
            &Self {
                name: H::NAME,
                handler_type_id: TypeId::of::<H>,
                value_type_name: core::any::type_name::<V>,
                debug: debug::<V, H>,
            }
        }
    }

    /// The name of the entry.
    #[inline]
    pub(super) fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`EntryVtable`].
    #[inline]
    pub(super) fn handler_type_id(&self) -> TypeId {
        (self.handler_type_id)()
    }

    /// Gets the type name of the value type.
    #[inline]
    pub(super) fn value_type_name(&self) -> &'static str {
        (self.value_type_name)()
    }

    /// Formats the value using the [`H::debug`] function used when creating
    /// this [`EntryVtable`].
    ///
    /// [`H::debug`]: EntryHandler::debug
    #[inline]
    pub(super) fn debug(
        &self,
        value: &dyn Any,
        formatter: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        (self.debug)(value, formatter)
    }
}

/// Formats an erased value with the handler `H`.
fn debug<V: 'static, H: EntryHandler<V>>(
    value: &dyn Any,
    formatter: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    match value.downcast_ref::<V>() {
        Some(value) => H::debug(value, formatter),
        None => Err(core::fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Celsius;

    impl EntryHandler<f32> for Celsius {
        const NAME: &'static str = "temperature";

        fn debug(value: &f32, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(formatter, "{value}C")
        }
    }

    #[test]
    fn test_vtable_records_type_pair() {
        let vtable = EntryVtable::new::<f32, Celsius>();
        assert_eq!(vtable.name(), "temperature");
        assert_eq!(vtable.value_type_name(), "f32");
        assert_eq!(vtable.handler_type_id(), TypeId::of::<Celsius>());
    }
}
