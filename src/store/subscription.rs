use std::fmt;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// RAII guard returned by [`Store::subscribe`](super::Store::subscribe) and
/// [`Atom::listen`](super::Atom::listen).
///
/// Dropping the guard releases the subscription. [`unsubscribe`](Self::unsubscribe)
/// does the same explicitly. The release callback runs at most once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    /// Create a guard that calls `release` when unsubscribed or dropped.
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Whether this guard still holds a live subscription.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the subscription now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
