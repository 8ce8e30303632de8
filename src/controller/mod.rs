//! Controllers binding atoms to a host's lifecycle.
//!
//! - [`StoreController`] watches one atom and exposes its value.
//! - [`MultiStoreController`] watches an ordered list of atoms and exposes
//!   their values in the same order.

mod binding;
mod multi;
mod single;

pub use multi::MultiStoreController;
pub use single::StoreController;
