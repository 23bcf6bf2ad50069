//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use async_trait::async_trait;
use car_gallery::model::Vehicle;
use car_gallery::source::{SourceError, VehicleSource};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

pub const PERIOD: Duration = Duration::from_millis(3000);

pub fn vehicle(id: &str, model: &str) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        model: model.to_string(),
        fuel: "Dizel".to_string(),
        transmission: "Manuel".to_string(),
        year: 2021,
        image_url: format!("https://cdn.example.com/{}.png", id),
    }
}

/// `n` distinct vehicles.
pub fn fleet(n: usize) -> Vec<Vehicle> {
    (0..n)
        .map(|i| vehicle(&format!("car-{}", i), &format!("Model {}", i)))
        .collect()
}

/// A Firestore REST document for `v`.
pub fn firestore_doc(v: &Vehicle) -> Value {
    json!({
        "name": format!("projects/demo/databases/(default)/documents/cars/{}", v.id),
        "fields": {
            "model": {"stringValue": v.model},
            "fuel": {"stringValue": v.fuel},
            "transmission": {"stringValue": v.transmission},
            "year": {"integerValue": v.year.to_string()},
            "imageUrl": {"stringValue": v.image_url}
        }
    })
}

/// Let spawned tasks run after time was advanced.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Everything currently queued on `rx`.
pub fn drain<T>(rx: &mut UnboundedReceiver<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(item) = rx.try_recv() {
        out.push(item);
    }
    out
}

/// Write `content` as config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write `vehicles` as a JSON fixture file.
pub fn temp_fixture(vehicles: &[Vehicle]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("cars.json");
    std::fs::write(&path, serde_json::to_string(vehicles).unwrap()).expect("Failed to write fixture");
    (temp_dir, path)
}

// -- Fake sources -------------------------------------------------------------

/// Source returning a fixed result after an optional delay.
pub struct FakeSource {
    result: Result<Vec<Vehicle>, String>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn ok(vehicles: Vec<Vehicle>) -> Self {
        Self {
            result: Ok(vehicles),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl VehicleSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_all(&self) -> Result<Vec<Vehicle>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.result {
            Ok(vehicles) => Ok(vehicles.clone()),
            Err(message) => Err(SourceError::Status {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}
