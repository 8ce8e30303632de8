//! # Tincan Controller
//!
//! Bind reactive stores to a component's lifecycle.
//!
//! A controller subscribes to its atoms when the host component connects,
//! asks the host to re-render on every change, and releases the
//! subscriptions when the host disconnects. Values are always read straight
//! from the atoms.
//!
//! ## Controllers
//!
//! - `StoreController<A>` - one atom, exposed through `value()`
//! - `MultiStoreController<L>` - a list or tuple of atoms, exposed through `values()`
//!
//! ## Construction helpers
//!
//! - `with_stores(element, stores)` - extend one component
//! - `use_stores(stores).decorate(constructor)` - extend every component a constructor builds
//!
//! ## Capabilities
//!
//! - `Atom` - what a store must provide (`get` and `listen`)
//! - `ControllerHost` / `ReactiveController` - what a component must provide
//! - `Store<T>` and `Element` - ready-made implementations of both

pub mod compose;
pub mod controller;
pub mod error;
pub mod host;
pub mod store;

// Re-export main types for convenience
pub use compose::{use_stores, with_stores, UseStores, WithStores};
pub use controller::{MultiStoreController, StoreController};
pub use error::{LifecycleError, Result};
pub use host::{ControllerHost, Element, ReactiveController};
pub use store::{Atom, ChangeListener, Store, StoreList, Subscription};
