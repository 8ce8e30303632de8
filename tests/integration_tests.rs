//! Integration tests for Tincan Controller

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tincan_controller::{
    use_stores, with_stores, Atom, ChangeListener, ControllerHost, Element, LifecycleError,
    MultiStoreController, ReactiveController, Store, StoreController, Subscription,
};

/// A host that only counts update requests, for checking the controllers
/// against something other than `Element`.
#[derive(Default)]
struct CountingHost {
    controllers: std::sync::Mutex<Vec<Arc<dyn ReactiveController>>>,
    requests: AtomicUsize,
}

impl CountingHost {
    fn mount(&self) {
        for controller in self.controllers.lock().unwrap().iter() {
            controller.host_connected();
        }
    }

    fn unmount(&self) {
        for controller in self.controllers.lock().unwrap().iter() {
            controller.host_disconnected();
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ControllerHost for CountingHost {
    fn add_controller(&self, controller: Arc<dyn ReactiveController>) {
        self.controllers.lock().unwrap().push(controller);
    }

    fn remove_controller(&self, _controller: &Arc<dyn ReactiveController>) {}

    fn request_update(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// An atom that counts how often its subscriptions are released.
struct CountingAtom {
    inner: Store<i32>,
    releases: Arc<AtomicUsize>,
}

impl Atom for CountingAtom {
    type Value = i32;

    fn get(&self) -> i32 {
        self.inner.get()
    }

    fn listen(&self, on_change: ChangeListener) -> Subscription {
        let inner = self.inner.subscribe(move |_| on_change());
        let releases = self.releases.clone();
        Subscription::new(move || {
            releases.fetch_add(1, Ordering::SeqCst);
            inner.unsubscribe();
        })
    }
}

#[test]
fn single_store_scenario() {
    let store = Store::new(0);
    let element = Arc::new(Element::new());
    let controller = StoreController::new(&element, store.clone());

    element.connect().unwrap();
    store.set(5);

    assert_eq!(controller.value(), 5);
    assert_eq!(element.update_requests(), 1);
}

#[test]
fn multi_store_scenario() {
    let first = Store::new(0);
    let second = Store::new("a");
    let element = Arc::new(Element::new());
    let controller = MultiStoreController::new(&element, (first.clone(), second.clone()));

    element.connect().unwrap();
    first.set(1);

    assert_eq!(controller.values(), (1, "a"));
    assert!(element.update_requests() >= 1);
}

#[test]
fn one_change_one_request_on_custom_host() {
    let host = Arc::new(CountingHost::default());
    let store = Store::new(0);
    let _controller = StoreController::new(&host, store.clone());

    host.mount();
    store.set(1);
    assert_eq!(host.requests(), 1);
}

#[test]
fn unmount_releases_every_subscription() {
    let stores = vec![Store::new(0), Store::new(0), Store::new(0)];
    let element = Arc::new(Element::new());
    let _controller = MultiStoreController::new(&element, stores.clone());

    element.connect().unwrap();
    element.disconnect().unwrap();

    for store in &stores {
        store.set(9);
        assert_eq!(store.subscriber_count(), 0);
    }
    assert_eq!(element.update_requests(), 0);
}

#[test]
fn empty_store_list() {
    let element = Arc::new(Element::new());
    let controller = MultiStoreController::new(&element, Vec::<Store<i32>>::new());

    element.connect().unwrap();
    element.disconnect().unwrap();
    assert_eq!(controller.values(), Vec::<i32>::new());
}

#[test]
fn values_are_readable_while_disconnected() {
    let store = Store::new(1);
    let element = Arc::new(Element::new());
    let controller = StoreController::new(&element, store.clone());

    assert_eq!(controller.value(), 1);
    store.set(2);
    assert_eq!(controller.value(), 2);

    element.connect().unwrap();
    element.disconnect().unwrap();
    store.set(3);
    assert_eq!(controller.value(), 3);
    assert_eq!(element.update_requests(), 0);
}

#[test]
fn remount_resubscribes() {
    let store = Store::new(0);
    let element = Arc::new(Element::new());
    let _controller = StoreController::new(&element, store.clone());

    element.connect().unwrap();
    element.disconnect().unwrap();
    element.connect().unwrap();

    store.set(1);
    assert_eq!(element.update_requests(), 1);
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn double_unmount_releases_once() {
    let releases = Arc::new(AtomicUsize::new(0));
    let atom = CountingAtom {
        inner: Store::new(0),
        releases: releases.clone(),
    };
    let host = Arc::new(CountingHost::default());
    let controller = StoreController::new(&host, atom);

    host.mount();
    host.unmount();
    host.unmount();
    controller.host_disconnected();

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn element_rejects_double_disconnect_without_touching_controllers() {
    let releases = Arc::new(AtomicUsize::new(0));
    let atom = CountingAtom {
        inner: Store::new(0),
        releases: releases.clone(),
    };
    let element = Arc::new(Element::new());
    let _controller = StoreController::new(&element, atom);

    element.connect().unwrap();
    element.disconnect().unwrap();
    assert_eq!(element.disconnect(), Err(LifecycleError::NotConnected));
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn wrapper_and_decorator_behave_alike() {
    let count = Store::new(0);
    let wrapped = with_stores(Element::new(), (count.clone(),));
    let decorated = use_stores((count.clone(),)).apply(Element::new());

    wrapped.connect().unwrap();
    decorated.connect().unwrap();
    count.set(7);

    assert_eq!(wrapped.values(), decorated.values());
    assert_eq!(wrapped.update_requests(), 1);
    assert_eq!(decorated.update_requests(), 1);
}

#[test]
fn dropping_a_component_releases_its_subscriptions() {
    let count = Store::new(0);
    {
        let element = with_stores(Element::new(), vec![count.clone()]);
        element.connect().unwrap();
        assert_eq!(count.subscriber_count(), 1);
    }
    assert_eq!(count.subscriber_count(), 0);
}

#[test]
fn update_cycle_renders_current_values() {
    let count = Store::new(0);
    let element = Arc::new(Element::new());
    let controller = StoreController::new(&element, count.clone());
    element.connect().unwrap();

    count.set(1);
    count.set(2);

    let mut rendered = Vec::new();
    assert!(element.update(|| rendered.push(controller.value())));
    assert!(!element.update(|| rendered.push(controller.value())));
    assert_eq!(rendered, vec![2]);
}
