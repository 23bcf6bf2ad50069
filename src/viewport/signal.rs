//! Viewport width notifications.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::scope::Release;

/// Callback invoked with the new viewport width.
pub type WidthListener = Box<dyn Fn(u32) + Send + Sync>;

/// Source of viewport width changes.
///
/// Implementations call every subscribed listener synchronously when the
/// width changes. Dropping (or releasing) the returned [`Subscription`]
/// removes the listener.
pub trait ViewportSignal: Send + Sync {
    /// Width at the time of the call.
    fn current_width(&self) -> u32;

    fn subscribe(&self, listener: WidthListener) -> Subscription;
}

type Listeners = Mutex<HashMap<u64, Arc<dyn Fn(u32) + Send + Sync>>>;

/// In-process broadcaster of widths.
///
/// The terminal event thread publishes resize events here; tests publish
/// synthetic widths directly.
#[derive(Clone)]
pub struct ViewportHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    width: AtomicU32,
    next_id: AtomicU64,
    listeners: Listeners,
}

impl ViewportHub {
    pub fn new(initial_width: u32) -> Self {
        Self {
            inner: Arc::new(HubInner {
                width: AtomicU32::new(initial_width),
                next_id: AtomicU64::new(0),
                listeners: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Record a new width and notify every listener.
    pub fn publish(&self, width: u32) {
        self.inner.width.store(width, Ordering::SeqCst);
        // Snapshot so listeners may subscribe/unsubscribe while being called.
        let listeners: Vec<_> = self.inner.listeners.lock().values().cloned().collect();
        for listener in listeners {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

impl ViewportSignal for ViewportHub {
    fn current_width(&self) -> u32 {
        self.inner.width.load(Ordering::SeqCst)
    }

    fn subscribe(&self, listener: WidthListener) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.listeners.lock().insert(id, Arc::from(listener));
        Subscription {
            id,
            hub: Some(Arc::downgrade(&self.inner)),
        }
    }
}

/// Registration of one listener. Unsubscribes on release or drop.
pub struct Subscription {
    id: u64,
    hub: Option<Weak<HubInner>>,
}

impl Release for Subscription {
    fn release(&mut self) {
        if let Some(hub) = self.hub.take().and_then(|w| w.upgrade()) {
            hub.listeners.lock().remove(&self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
