#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A global setting guarded by a reader-writer lock.
///
/// With the `std` feature this is the standard library's lock, otherwise a
/// spinning one. A poisoned lock still holds a valid value since writers
/// only ever swap it out whole, so poisoning is ignored.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Copy + Send + Sync>(impl_::RwLock<T>);

impl<T: 'static + Copy + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new(value: T) -> Self {
        Self(impl_::RwLock::new(value))
    }

    #[inline]
    pub(crate) fn get(&'static self) -> T {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(std::sync::PoisonError::into_inner);

        *guard
    }

    /// Stores `value`, returning the one it replaced.
    #[inline]
    pub(crate) fn replace(&'static self, value: T) -> T {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        core::mem::replace(&mut *guard, value)
    }
}
