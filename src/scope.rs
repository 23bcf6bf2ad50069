//! Scoped ownership of cancellable resources.
//!
//! A [`Scope`] holds at most one live resource. Re-arming it releases the
//! previous resource before the new one is stored, and dropping the scope
//! releases whatever it still holds. Timers, fetch tasks and listener
//! subscriptions all go through this type so none of them can outlive
//! their owner or pile up across re-arms.

use tokio::task::JoinHandle;

/// A resource that must be released exactly once.
pub trait Release {
    /// Stop the underlying activity. Called at most once per resource.
    fn release(&mut self);
}

/// Owner slot for a single releasable resource.
pub struct Scope<R: Release> {
    current: Option<R>,
}

impl<R: Release> Scope<R> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Release the held resource (if any), then hold `next` (if any).
    pub fn rearm(&mut self, next: Option<R>) {
        self.cancel();
        self.current = next;
    }

    /// Release the held resource and leave the scope empty.
    pub fn cancel(&mut self) {
        if let Some(mut resource) = self.current.take() {
            resource.release();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }

    pub fn get(&self) -> Option<&R> {
        self.current.as_ref()
    }
}

impl<R: Release> Default for Scope<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Release> Drop for Scope<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A spawned tokio task that is aborted when released.
pub struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Release for TaskGuard {
    fn release(&mut self) {
        self.handle.abort();
    }
}
