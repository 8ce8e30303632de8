use super::binding::Binding;
use crate::host::{ControllerHost, ReactiveController};
use crate::store::StoreList;
use std::sync::Arc;

/// A controller that re-renders its host whenever any of several atoms
/// changes.
///
/// Every change requests one update; there is no batching across atoms, so
/// coalescing is up to the host. [`values`] is recomputed on every call.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tincan_controller::{Element, MultiStoreController, Store};
///
/// let count = Store::new(0);
/// let label = Store::new("a".to_string());
/// let element = Arc::new(Element::new());
/// let controller = MultiStoreController::new(&element, (count.clone(), label.clone()));
///
/// element.connect().unwrap();
/// count.set(1);
/// assert_eq!(controller.values(), (1, "a".to_string()));
/// ```
///
/// [`values`]: MultiStoreController::values
pub struct MultiStoreController<L> {
    binding: Binding<L>,
}

impl<L: StoreList + 'static> MultiStoreController<L> {
    /// Create a controller for `stores` and register it with `host`.
    pub fn new<H: ControllerHost + 'static>(host: &Arc<H>, stores: L) -> Arc<Self> {
        let controller = Arc::new(Self {
            binding: Binding::new(host, stores),
        });
        host.add_controller(controller.clone());
        tracing::debug!(stores = controller.len(), "multi-store controller attached");
        controller
    }

    /// Current values of every atom, in list order.
    pub fn values(&self) -> L::Values {
        self.binding.values()
    }

    /// The bound atoms.
    pub fn stores(&self) -> &L {
        self.binding.stores()
    }

    /// Number of atoms watched.
    pub fn len(&self) -> usize {
        self.binding.stores().len()
    }

    /// Whether no atoms are watched.
    pub fn is_empty(&self) -> bool {
        self.binding.stores().is_empty()
    }

    /// Number of live subscriptions: `len()` while connected, otherwise zero.
    pub fn subscription_count(&self) -> usize {
        self.binding.subscription_count()
    }
}

impl<L: StoreList> ReactiveController for MultiStoreController<L> {
    fn host_connected(&self) {
        self.binding.connect();
    }

    fn host_disconnected(&self) {
        self.binding.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Element;
    use crate::store::Store;

    #[test]
    fn subscribes_to_every_store() {
        let element = Arc::new(Element::new());
        let stores = vec![Store::new(0), Store::new(1), Store::new(2)];
        let controller = MultiStoreController::new(&element, stores.clone());

        element.connect().unwrap();
        assert_eq!(controller.subscription_count(), 3);
        assert!(stores.iter().all(|store| store.subscriber_count() == 1));

        element.disconnect().unwrap();
        assert_eq!(controller.subscription_count(), 0);
        assert!(stores.iter().all(|store| store.subscriber_count() == 0));
    }

    #[test]
    fn any_store_requests_an_update() {
        let element = Arc::new(Element::new());
        let a = Store::new(0);
        let b = Store::new(0);
        let _controller = MultiStoreController::new(&element, (a.clone(), b.clone()));
        element.connect().unwrap();

        a.set(1);
        b.set(1);
        assert_eq!(element.update_requests(), 2);
    }

    #[test]
    fn empty_list_is_valid() {
        let element = Arc::new(Element::new());
        let controller = MultiStoreController::new(&element, Vec::<Store<i32>>::new());

        element.connect().unwrap();
        assert!(controller.is_empty());
        assert_eq!(controller.subscription_count(), 0);
        assert!(controller.values().is_empty());
        element.disconnect().unwrap();
    }

    #[test]
    fn unit_list_is_valid() {
        let element = Arc::new(Element::new());
        let controller = MultiStoreController::new(&element, ());
        element.connect().unwrap();
        let () = controller.values();
        assert_eq!(controller.len(), 0);
    }
}
