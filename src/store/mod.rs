//! Stores and the atom capability controllers bind to.
//!
//! [`Atom`] is the minimal contract a store exposes to a controller: read the
//! current value and register a change listener. [`Store`] is the crate's own
//! implementation; any other store can be bound by implementing [`Atom`].

mod atom;
mod store;
mod subscription;

pub use atom::{Atom, ChangeListener, StoreList};
pub use store::Store;
pub use subscription::Subscription;
