//! Compact/wide layout switch driven by viewport width.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use crate::scope::Scope;
use crate::viewport::signal::{Subscription, ViewportSignal};

/// Default breakpoint: widths at or below this use the compact layout.
pub const COMPACT_BREAKPOINT: u32 = 768;

/// Layout mode derived from the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMode {
    pub is_compact: bool,
}

impl ViewportMode {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        Self {
            is_compact: width <= breakpoint,
        }
    }
}

/// Keeps [`ViewportMode`] current for as long as it is alive.
///
/// The mode is computed once from the signal's width at start and again,
/// synchronously, on every notification.
pub struct ViewportTracker {
    compact: Arc<AtomicBool>,
    width: Arc<AtomicU32>,
    breakpoint: u32,
    subscription: Scope<Subscription>,
}

impl ViewportTracker {
    pub fn start(signal: &dyn ViewportSignal, breakpoint: u32) -> Self {
        Self::start_with(signal, breakpoint, |_| {})
    }

    /// Like [`start`](Self::start), also calling `on_change` whenever the
    /// mode flips.
    pub fn start_with<F>(signal: &dyn ViewportSignal, breakpoint: u32, on_change: F) -> Self
    where
        F: Fn(ViewportMode) + Send + Sync + 'static,
    {
        let initial = signal.current_width();
        let compact = Arc::new(AtomicBool::new(
            ViewportMode::for_width(initial, breakpoint).is_compact,
        ));
        let width = Arc::new(AtomicU32::new(initial));

        let listener_compact = Arc::clone(&compact);
        let listener_width = Arc::clone(&width);
        let subscription = signal.subscribe(Box::new(move |new_width| {
            listener_width.store(new_width, Ordering::SeqCst);
            let mode = ViewportMode::for_width(new_width, breakpoint);
            let was = listener_compact.swap(mode.is_compact, Ordering::SeqCst);
            if was != mode.is_compact {
                tracing::debug!(width = new_width, compact = mode.is_compact, "Viewport mode changed");
                on_change(mode);
            }
        }));

        let mut scope = Scope::new();
        scope.rearm(Some(subscription));
        Self {
            compact,
            width,
            breakpoint,
            subscription: scope,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact.load(Ordering::SeqCst)
    }

    pub fn mode(&self) -> ViewportMode {
        ViewportMode {
            is_compact: self.is_compact(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.load(Ordering::SeqCst)
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_armed()
    }

    /// Unsubscribe. The mode stays at its last value.
    pub fn stop(&mut self) {
        self.subscription.cancel();
    }
}
