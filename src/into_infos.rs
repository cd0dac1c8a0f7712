use alloc::vec::Vec;

use crate::{Info, InfoStore, Tag};

/// A list of facts that can be inserted into an [`InfoStore`].
///
/// This is how error constructors accept any number of extra facts: pass `()`
/// for none, a single [`Info`], or a tuple of them. Facts are inserted in
/// argument order, so when the same tag appears twice the later value wins.
///
/// # Examples
///
/// ```
/// use factum::prelude::*;
///
/// tag! {
///     pub Host: &'static str = "host";
///     pub Port: u16 = "port";
/// }
///
/// let none = Error::new("no extras", ());
/// let one = Error::new("one extra", Host::info("localhost"));
/// let many = Error::new("two extras", (Host::info("localhost"), Port::info(8080)));
/// let maybe = Error::new("optional extra", Some(Port::info(443)));
///
/// assert!(none.lookup::<Host>().is_none());
/// assert_eq!(one.lookup::<Host>(), Some(&"localhost"));
/// assert_eq!(many.lookup::<Port>(), Some(&8080));
/// assert_eq!(maybe.lookup::<Port>(), Some(&443));
/// ```
pub trait IntoInfos {
    /// Inserts every fact into `store`, in order.
    fn insert_into(self, store: &mut InfoStore);
}

impl IntoInfos for () {
    #[inline]
    fn insert_into(self, _store: &mut InfoStore) {}
}

impl<T: Tag> IntoInfos for Info<T> {
    #[inline]
    fn insert_into(self, store: &mut InfoStore) {
        store.insert(self);
    }
}

impl<I: IntoInfos> IntoInfos for Option<I> {
    #[inline]
    fn insert_into(self, store: &mut InfoStore) {
        if let Some(infos) = self {
            infos.insert_into(store);
        }
    }
}

impl<I: IntoInfos> IntoInfos for Vec<I> {
    fn insert_into(self, store: &mut InfoStore) {
        for infos in self {
            infos.insert_into(store);
        }
    }
}

impl<const N: usize, I: IntoInfos> IntoInfos for [I; N] {
    fn insert_into(self, store: &mut InfoStore) {
        for infos in self {
            infos.insert_into(store);
        }
    }
}

macro_rules! impl_into_infos_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoInfos),+> IntoInfos for ($($name,)+) {
            #[inline]
            #[allow(non_snake_case, reason = "type parameters double as bindings")]
            fn insert_into(self, store: &mut InfoStore) {
                let ($($name,)+) = self;
                $($name.insert_into(store);)+
            }
        }
    };
}

impl_into_infos_for_tuple!(A);
impl_into_infos_for_tuple!(A, B);
impl_into_infos_for_tuple!(A, B, C);
impl_into_infos_for_tuple!(A, B, C, D);
impl_into_infos_for_tuple!(A, B, C, D, E);
impl_into_infos_for_tuple!(A, B, C, D, E, F);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G, H);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_infos_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
