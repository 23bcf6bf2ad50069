//! Fixed-period auto-advance timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{interval_at, Instant};

use crate::scope::{Release, TaskGuard};

/// One tick of the auto-advance timer.
///
/// Tagged with the generation of the timer that produced it so ticks
/// still queued from a cancelled timer can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryTick {
    pub generation: u64,
}

/// A running timer task. The first tick fires one full period after start.
pub struct Ticker {
    guard: TaskGuard,
    generation: u64,
}

impl Ticker {
    pub fn start<E>(period: Duration, generation: u64, tx: UnboundedSender<E>) -> Self
    where
        E: From<GalleryTick> + Send + 'static,
    {
        // Phase is fixed here, not when the task first gets polled.
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            loop {
                interval.tick().await;
                tracing::trace!(generation, "Gallery tick");
                if tx.send(E::from(GalleryTick { generation })).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "Gallery timer armed");
        Self {
            guard: TaskGuard::new(handle),
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Release for Ticker {
    fn release(&mut self) {
        self.guard.release();
        tracing::debug!(generation = self.generation, "Gallery timer cancelled");
    }
}
