use super::WithStores;
use crate::host::ControllerHost;
use crate::store::StoreList;

/// Atoms captured once, ready to be attached to every component built by a
/// decorated constructor.
///
/// Each component gets its own controller; the atoms themselves are shared
/// through `Clone`.
#[derive(Clone, Debug)]
pub struct UseStores<L> {
    stores: L,
}

/// Capture `stores` for [`UseStores::decorate`] or [`UseStores::apply`].
///
/// # Example
///
/// ```
/// use tincan_controller::{use_stores, Element, Store};
///
/// let count = Store::new(0);
/// let new_counter = use_stores((count.clone(),)).decorate(|_: ()| Element::new());
///
/// let first = new_counter(());
/// let second = new_counter(());
/// first.connect().unwrap();
/// second.connect().unwrap();
///
/// count.set(1);
/// assert_eq!(first.update_requests(), 1);
/// assert_eq!(second.update_requests(), 1);
/// ```
pub fn use_stores<L: StoreList + Clone>(stores: L) -> UseStores<L> {
    UseStores { stores }
}

impl<L: StoreList + Clone + 'static> UseStores<L> {
    /// Extend one freshly built component.
    pub fn apply<E: ControllerHost + 'static>(&self, element: E) -> WithStores<E, L> {
        WithStores::new(element, self.stores.clone())
    }

    /// Turn `construct` into a constructor whose components are extended
    /// with a controller over the captured atoms.
    pub fn decorate<Args, E, F>(self, construct: F) -> impl Fn(Args) -> WithStores<E, L>
    where
        E: ControllerHost + 'static,
        F: Fn(Args) -> E,
    {
        move |args| self.apply(construct(args))
    }

    /// The captured atoms.
    pub fn stores(&self) -> &L {
        &self.stores
    }
}
