//! Error types for host lifecycle misuse.

use thiserror::Error;

/// Errors reported by [`Element`](crate::host::Element) when the hosting
/// environment drives its lifecycle out of order.
///
/// Controllers are not notified when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("element is already connected")]
    AlreadyConnected,

    #[error("element is not connected")]
    NotConnected,
}

/// Result alias for lifecycle operations.
pub type Result<T, E = LifecycleError> = std::result::Result<T, E>;
