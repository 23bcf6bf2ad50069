//! Ordered shutdown of the page runtime.
//!
//! One atomic phase is shared by the coordinator (owned by the event loop)
//! and every handle (input thread, signal listener). Leaving `Running` is
//! the shutdown signal itself; later phases only record progress.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ShutdownPhase {
    Running = 0,
    Signaled = 1,
    /// Fetch, gallery timer and resize subscription being released.
    ReleasingPage = 2,
    StoppingInput = 3,
    RestoringTerminal = 4,
    Complete = 5,
}

impl From<u8> for ShutdownPhase {
    fn from(raw: u8) -> Self {
        match raw {
            0 => ShutdownPhase::Running,
            1 => ShutdownPhase::Signaled,
            2 => ShutdownPhase::ReleasingPage,
            3 => ShutdownPhase::StoppingInput,
            4 => ShutdownPhase::RestoringTerminal,
            _ => ShutdownPhase::Complete,
        }
    }
}

struct Shared {
    phase: AtomicU8,
    notify: Notify,
}

impl Shared {
    fn phase(&self) -> ShutdownPhase {
        ShutdownPhase::from(self.phase.load(Ordering::SeqCst))
    }

    /// Move out of `Running`. Returns false if that already happened.
    fn signal(&self) -> bool {
        let moved = self
            .phase
            .compare_exchange(
                ShutdownPhase::Running as u8,
                ShutdownPhase::Signaled as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok();
        if moved {
            self.notify.notify_waiters();
        }
        moved
    }
}

pub struct ShutdownCoordinator {
    shared: Arc<Shared>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                phase: AtomicU8::new(ShutdownPhase::Running as u8),
                notify: Notify::new(),
            }),
        }
    }

    pub fn signal(&self) {
        if self.shared.signal() {
            tracing::info!("Shutdown initiated");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.phase() != ShutdownPhase::Running
    }

    pub fn phase(&self) -> ShutdownPhase {
        self.shared.phase()
    }

    /// Record progress. Phases never move backwards.
    pub fn advance(&self, phase: ShutdownPhase) {
        self.shared.phase.fetch_max(phase as u8, Ordering::SeqCst);
        tracing::debug!(?phase, "Shutdown phase");
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable view of the shutdown state for background workers.
#[derive(Clone)]
pub struct ShutdownHandle {
    shared: Arc<Shared>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shared.phase() != ShutdownPhase::Running
    }

    pub fn signal(&self) {
        self.shared.signal();
    }

    pub async fn wait(&self) {
        // Register interest before checking the phase so a signal between
        // the check and the await is not lost.
        let notified = self.shared.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}
