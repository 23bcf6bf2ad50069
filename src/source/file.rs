use std::path::PathBuf;

use async_trait::async_trait;

use crate::model::Vehicle;
use crate::source::{SourceError, VehicleSource};

/// Reads vehicles from a local JSON array, for offline use.
///
/// Entries use the same keys as the stored documents
/// (`id`, `model`, `fuel`, `transmission`, `year`, `imageUrl`).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VehicleSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_all(&self) -> Result<Vec<Vehicle>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        serde_json::from_str(&content).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
