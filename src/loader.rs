//! One-shot, cancellable fetch of the vehicle collection.
//!
//! The fetch runs on its own task and reports back through the page's
//! event channel. Failures are logged and reported as an empty list, so
//! the page always leaves the loading state. Dropping the returned
//! [`LoadTask`] aborts the fetch, and a result that races with teardown is
//! discarded because nobody is listening on the channel any more.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use crate::model::Vehicle;
use crate::scope::{Release, TaskGuard};
use crate::source::VehicleSource;

/// Handle to an in-flight fetch. Released (aborted) on drop.
pub struct LoadTask {
    guard: Option<TaskGuard>,
}

impl LoadTask {
    pub fn is_finished(&self) -> bool {
        self.guard.as_ref().map_or(true, TaskGuard::is_finished)
    }
}

impl Release for LoadTask {
    fn release(&mut self) {
        if let Some(mut guard) = self.guard.take() {
            guard.release();
        }
    }
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.release();
    }
}

/// Start the fetch. `deliver` receives the outcome exactly once unless
/// the task is released first.
pub fn spawn<T, F>(source: Arc<dyn VehicleSource>, tx: UnboundedSender<T>, deliver: F) -> LoadTask
where
    T: Send + 'static,
    F: FnOnce(Vec<Vehicle>) -> T + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let vehicles = fetch_or_empty(source.as_ref()).await;
        if tx.send(deliver(vehicles)).is_err() {
            tracing::debug!("Vehicle list arrived after the page closed");
        }
    });
    LoadTask {
        guard: Some(TaskGuard::new(handle)),
    }
}

/// Run the fetch, logging and swallowing failures.
pub async fn fetch_or_empty(source: &dyn VehicleSource) -> Vec<Vehicle> {
    let started = Instant::now();
    match source.fetch_all().await {
        Ok(vehicles) => {
            tracing::info!(
                source = source.name(),
                count = vehicles.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Vehicles loaded"
            );
            vehicles
        }
        Err(err) => {
            tracing::error!(
                source = source.name(),
                kind = err.kind(),
                error = %err,
                "Error fetching vehicles"
            );
            Vec::new()
        }
    }
}
