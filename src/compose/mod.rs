//! Attaching controllers to components at construction time.
//!
//! [`with_stores`] extends one component; [`use_stores`] captures a list of
//! atoms once and decorates a constructor so every component it builds is
//! extended the same way. Both end in [`WithStores::attach`].

mod use_stores;
mod with_stores;

pub use use_stores::{use_stores, UseStores};
pub use with_stores::{with_stores, WithStores};
