use super::{Atom, ChangeListener, Subscription};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;
type Subscribers<T> = RwLock<Vec<(usize, Subscriber<T>)>>;

/// A thread-safe store holding a single value.
///
/// Clones share the same state and subscriber list. Every `set` or `update`
/// notifies all subscribers with the new value.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<Subscribers<T>>,
    next_id: Arc<AtomicUsize>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.read_state().clone()
    }

    /// Update the state using a function.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut state = self.write_state();
            f(&mut *state);
        }
        self.notify();
    }

    /// Set a new state value.
    pub fn set(&self, new_state: T) {
        *self.write_state() = new_state;
        self.notify();
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.read_state();
        f(&*state)
    }

    /// Number of live subscriptions on this store.
    pub fn subscriber_count(&self) -> usize {
        read_lock(&self.subscribers).len()
    }

    /// Notify all subscribers of a state change.
    ///
    /// Callbacks run against a snapshot taken before the first call, with no
    /// lock held, so they may read the store or drop their own subscription.
    fn notify(&self) {
        let value = self.get();
        let subscribers: Vec<Subscriber<T>> = read_lock(&self.subscribers)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        tracing::trace!(subscribers = subscribers.len(), "store changed");
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, T> {
        read_lock(&self.state)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, T> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Subscribe to state changes.
    ///
    /// The callback is called with the new state on every change until the
    /// returned [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        tracing::trace!(id, "store subscriber added");

        let subscribers: Weak<Subscribers<T>> = Arc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|(existing, _)| *existing != id);
                tracing::trace!(id, "store subscriber removed");
            }
        })
    }
}

impl<T: Clone> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.read_state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Atom for Store<T> {
    type Value = T;

    fn get(&self) -> T {
        Store::get(self)
    }

    fn listen(&self, on_change: ChangeListener) -> Subscription {
        self.subscribe(move |_| on_change())
    }
}

fn read_lock<T: ?Sized>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}
