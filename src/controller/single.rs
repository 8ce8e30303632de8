use super::binding::Binding;
use crate::host::{ControllerHost, ReactiveController};
use crate::store::Atom;
use std::sync::Arc;

/// A controller that re-renders its host whenever one atom changes.
///
/// The subscription lives only while the host is connected. [`value`]
/// reads the atom directly, so it is current even while disconnected.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tincan_controller::{Element, Store, StoreController};
///
/// let count = Store::new(0);
/// let element = Arc::new(Element::new());
/// let controller = StoreController::new(&element, count.clone());
///
/// element.connect().unwrap();
/// count.set(5);
/// assert_eq!(controller.value(), 5);
/// assert_eq!(element.update_requests(), 1);
/// ```
///
/// [`value`]: StoreController::value
pub struct StoreController<A> {
    binding: Binding<(A,)>,
}

impl<A: Atom + 'static> StoreController<A> {
    /// Create a controller for `atom` and register it with `host`.
    pub fn new<H: ControllerHost + 'static>(host: &Arc<H>, atom: A) -> Arc<Self> {
        let controller = Arc::new(Self {
            binding: Binding::new(host, (atom,)),
        });
        host.add_controller(controller.clone());
        controller
    }

    /// The atom's current value.
    pub fn value(&self) -> A::Value {
        self.atom().get()
    }

    /// The bound atom.
    pub fn atom(&self) -> &A {
        &self.binding.stores().0
    }

    /// Whether the controller currently holds a subscription.
    pub fn is_subscribed(&self) -> bool {
        self.binding.subscription_count() > 0
    }
}

impl<A: Atom> ReactiveController for StoreController<A> {
    fn host_connected(&self) {
        self.binding.connect();
    }

    fn host_disconnected(&self) {
        self.binding.disconnect();
    }
}
