use crate::host::ControllerHost;
use crate::store::{ChangeListener, StoreList, Subscription};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Subscribe-on-connect, release-on-disconnect glue shared by every
/// controller in this crate.
///
/// The host is held weakly: the host owns its controllers, so a strong
/// reference here would keep it alive forever.
pub(crate) struct Binding<L> {
    stores: L,
    host: Weak<dyn ControllerHost>,
    active: Mutex<Vec<Subscription>>,
}

impl<L: StoreList> Binding<L> {
    pub(crate) fn new<H: ControllerHost + 'static>(host: &Arc<H>, stores: L) -> Self {
        let host: Weak<H> = Arc::downgrade(host);
        let host: Weak<dyn ControllerHost> = host;
        Self {
            stores,
            host,
            active: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn stores(&self) -> &L {
        &self.stores
    }

    /// Listen to every store in list order.
    ///
    /// The new guards are collected before they replace the old ones, so the
    /// active list holds either every subscription or none. If a store
    /// panics part way, the guards already created are dropped while
    /// unwinding and their subscriptions released.
    pub(crate) fn connect(&self) {
        let host = Weak::clone(&self.host);
        let on_change: ChangeListener = Arc::new(move || {
            if let Some(host) = host.upgrade() {
                host.request_update();
            }
        });

        let subscriptions = self.stores.listen_all(&on_change);
        let count = subscriptions.len();
        let previous = mem::replace(&mut *self.lock_active(), subscriptions);
        tracing::debug!(
            stores = self.stores.len(),
            subscriptions = count,
            replaced = previous.len(),
            "binding connected"
        );
        release(previous);
    }

    /// Release every subscription in list order. No-op when nothing is held.
    pub(crate) fn disconnect(&self) {
        let subscriptions = mem::take(&mut *self.lock_active());
        if subscriptions.is_empty() {
            return;
        }
        tracing::debug!(subscriptions = subscriptions.len(), "binding disconnected");
        release(subscriptions);
    }

    pub(crate) fn values(&self) -> L::Values {
        self.stores.values()
    }

    pub(crate) fn subscription_count(&self) -> usize {
        self.lock_active().len()
    }

    fn lock_active(&self) -> MutexGuard<'_, Vec<Subscription>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn release(subscriptions: Vec<Subscription>) {
    for subscription in subscriptions {
        subscription.unsubscribe();
    }
}
