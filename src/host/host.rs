use std::sync::Arc;

/// An object attached to a host that reacts to the host's lifecycle.
///
/// All hooks default to doing nothing.
pub trait ReactiveController: Send + Sync {
    /// Called when the host is connected (mounted).
    fn host_connected(&self) {}

    /// Called when the host is disconnected (unmounted).
    fn host_disconnected(&self) {}

    /// Called at the start of a host update, before rendering.
    fn host_update(&self) {}

    /// Called after a host update has rendered.
    fn host_updated(&self) {}
}

/// The capability a controller needs from the component it is attached to.
pub trait ControllerHost: Send + Sync {
    /// Register a controller for lifecycle notifications.
    fn add_controller(&self, controller: Arc<dyn ReactiveController>);

    /// Stop notifying a previously added controller.
    fn remove_controller(&self, controller: &Arc<dyn ReactiveController>);

    /// Schedule a re-render of the host.
    fn request_update(&self);
}

impl<H: ControllerHost + ?Sized> ControllerHost for Arc<H> {
    fn add_controller(&self, controller: Arc<dyn ReactiveController>) {
        (**self).add_controller(controller);
    }

    fn remove_controller(&self, controller: &Arc<dyn ReactiveController>) {
        (**self).remove_controller(controller);
    }

    fn request_update(&self) {
        (**self).request_update();
    }
}
