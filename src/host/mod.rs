//! Component hosts and the controller lifecycle.
//!
//! A host is whatever owns the render loop: it registers controllers, tells
//! them when it is connected or disconnected, and accepts update requests.
//! [`Element`] is a ready-made host; frameworks can implement
//! [`ControllerHost`] on their own component type instead.

mod element;
mod host;

pub use element::Element;
pub use host::{ControllerHost, ReactiveController};
