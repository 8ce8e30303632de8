use crate::controller::MultiStoreController;
use crate::host::{ControllerHost, ReactiveController};
use crate::store::StoreList;
use std::ops::Deref;
use std::sync::Arc;

/// A component extended with a [`MultiStoreController`] over a fixed list of
/// atoms.
///
/// Derefs to the wrapped component, and is itself a [`ControllerHost`], so
/// wrappers can be stacked.
///
/// # Example
///
/// ```
/// use tincan_controller::{with_stores, Element, Store};
///
/// let count = Store::new(0);
/// let element = with_stores(Element::new(), [count.clone()]);
///
/// element.connect().unwrap();
/// count.set(3);
/// assert_eq!(element.values(), [3]);
/// assert!(element.is_update_pending());
/// ```
pub struct WithStores<E, L> {
    host: Arc<E>,
    controller: Arc<MultiStoreController<L>>,
}

impl<E, L> WithStores<E, L>
where
    E: ControllerHost + 'static,
    L: StoreList + 'static,
{
    /// Construct the extended component around `element`.
    pub fn new(element: E, stores: L) -> Self {
        Self::attach(Arc::new(element), stores)
    }

    /// Attach a controller over `stores` to an already shared component.
    pub fn attach(host: Arc<E>, stores: L) -> Self {
        let controller = MultiStoreController::new(&host, stores);
        Self { host, controller }
    }

    /// Current values of every bound atom, in list order.
    pub fn values(&self) -> L::Values {
        self.controller.values()
    }
}

impl<E, L> WithStores<E, L> {
    /// The shared component handle, as seen by its controllers.
    pub fn host(&self) -> &Arc<E> {
        &self.host
    }

    /// The controller attached at construction.
    pub fn controller(&self) -> &Arc<MultiStoreController<L>> {
        &self.controller
    }

    /// Split into the shared component and its controller.
    pub fn into_parts(self) -> (Arc<E>, Arc<MultiStoreController<L>>) {
        (self.host, self.controller)
    }
}

impl<E, L> Deref for WithStores<E, L> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.host
    }
}

impl<E, L> ControllerHost for WithStores<E, L>
where
    E: ControllerHost,
    L: Send + Sync,
{
    fn add_controller(&self, controller: Arc<dyn ReactiveController>) {
        self.host.add_controller(controller);
    }

    fn remove_controller(&self, controller: &Arc<dyn ReactiveController>) {
        self.host.remove_controller(controller);
    }

    fn request_update(&self) {
        self.host.request_update();
    }
}

/// Extend `element` with a controller over `stores`.
///
/// Shorthand for [`WithStores::new`].
pub fn with_stores<E, L>(element: E, stores: L) -> WithStores<E, L>
where
    E: ControllerHost + 'static,
    L: StoreList + 'static,
{
    WithStores::new(element, stores)
}
