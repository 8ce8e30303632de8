use super::{ControllerHost, ReactiveController};
use crate::error::{LifecycleError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A minimal component host.
///
/// `Element` keeps the registered controllers, forwards lifecycle
/// transitions to them and coalesces update requests into a single pending
/// flag that the hosting environment drains with [`Element::update`].
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
/// count.set(1);
/// assert!(element.is_update_pending());
/// assert!(element.update(|| assert_eq!(controller.value(), 1)));
/// ```
#[derive(Default)]
pub struct Element {
    controllers: Mutex<Vec<Arc<dyn ReactiveController>>>,
    connected: AtomicBool,
    update_pending: AtomicBool,
    update_requests: AtomicUsize,
    updates: AtomicUsize,
}

impl Element {
    /// Create a disconnected element with no controllers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the element, notifying every controller in registration order.
    pub fn connect(&self) -> Result<()> {
        if self.connected.swap(true, Ordering::SeqCst) {
            return Err(LifecycleError::AlreadyConnected);
        }
        let controllers = self.snapshot();
        let mut attempt = ConnectAttempt {
            element: self,
            connected: Vec::with_capacity(controllers.len()),
            completed: false,
        };
        for controller in controllers {
            controller.host_connected();
            attempt.connected.push(controller);
        }
        attempt.completed = true;
        tracing::debug!(controllers = attempt.connected.len(), "element connected");
        Ok(())
    }

    /// Unmount the element, notifying every controller in registration order.
    pub fn disconnect(&self) -> Result<()> {
        if !self.connected.swap(false, Ordering::SeqCst) {
            return Err(LifecycleError::NotConnected);
        }
        let controllers = self.snapshot();
        tracing::debug!(controllers = controllers.len(), "element disconnected");
        for controller in controllers {
            controller.host_disconnected();
        }
        Ok(())
    }

    /// Run one update cycle if an update was requested.
    ///
    /// Controllers see `host_update` before `render` and `host_updated`
    /// after it. Returns `false` without rendering when nothing is pending.
    pub fn update<F: FnOnce()>(&self, render: F) -> bool {
        if !self.update_pending.swap(false, Ordering::SeqCst) {
            return false;
        }
        let controllers = self.snapshot();
        for controller in &controllers {
            controller.host_update();
        }
        render();
        for controller in &controllers {
            controller.host_updated();
        }
        let updates = self.updates.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(updates, "element updated");
        true
    }

    /// Whether the element is currently mounted.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Whether an update was requested and not yet performed.
    pub fn is_update_pending(&self) -> bool {
        self.update_pending.load(Ordering::SeqCst)
    }

    /// Total number of `request_update` calls, coalesced or not.
    pub fn update_requests(&self) -> usize {
        self.update_requests.load(Ordering::SeqCst)
    }

    /// Number of completed update cycles.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Number of registered controllers.
    pub fn controller_count(&self) -> usize {
        self.lock_controllers().len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn ReactiveController>> {
        self.lock_controllers().clone()
    }

    fn lock_controllers(&self) -> MutexGuard<'_, Vec<Arc<dyn ReactiveController>>> {
        self.controllers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rolls back a `connect` that panicked part way: controllers already
/// connected are disconnected again and the element is left unmounted.
struct ConnectAttempt<'a> {
    element: &'a Element,
    connected: Vec<Arc<dyn ReactiveController>>,
    completed: bool,
}

impl Drop for ConnectAttempt<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        self.element.connected.store(false, Ordering::SeqCst);
        tracing::debug!(
            rolled_back = self.connected.len(),
            "element connect aborted"
        );
        for controller in self.connected.drain(..) {
            controller.host_disconnected();
        }
    }
}

/// A connected element disconnects its controllers when dropped, so
/// controllers kept alive elsewhere do not stay subscribed.
impl Drop for Element {
    fn drop(&mut self) {
        if !*self.connected.get_mut() {
            return;
        }
        let controllers = self
            .controllers
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(controllers = controllers.len(), "connected element dropped");
        for controller in controllers.iter() {
            controller.host_disconnected();
        }
    }
}

impl ControllerHost for Element {
    /// Registers `controller`; when the element is already connected the
    /// controller is connected right away.
    fn add_controller(&self, controller: Arc<dyn ReactiveController>) {
        self.lock_controllers().push(Arc::clone(&controller));
        tracing::debug!("controller added");
        if self.is_connected() {
            controller.host_connected();
        }
    }

    fn remove_controller(&self, controller: &Arc<dyn ReactiveController>) {
        let target = Arc::as_ptr(controller) as *const ();
        self.lock_controllers()
            .retain(|existing| Arc::as_ptr(existing) as *const () != target);
        tracing::debug!("controller removed");
    }

    fn request_update(&self) {
        self.update_requests.fetch_add(1, Ordering::SeqCst);
        self.update_pending.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("connected", &self.is_connected())
            .field("controllers", &self.controller_count())
            .field("update_pending", &self.is_update_pending())
            .field("update_requests", &self.update_requests())
            .finish()
    }
}
