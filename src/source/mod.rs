//! Read access to the hosted vehicle collection.
//!
//! The page treats whatever a source returns as the complete, ordered
//! vehicle list for the session. Sources do not stream or subscribe.

mod error;
mod file;
mod firestore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{SourceConfig, SourceKind};
use crate::model::Vehicle;

pub use error::SourceError;
pub use file::FileSource;
pub use firestore::FirestoreSource;

/// One-shot read of the full vehicle collection.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Name used in log fields.
    fn name(&self) -> &'static str;

    /// Fetch every vehicle, in backend order.
    async fn fetch_all(&self) -> Result<Vec<Vehicle>, SourceError>;
}

/// Build the source selected by `config`.
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn VehicleSource>, SourceError> {
    match config.kind {
        SourceKind::Firestore => Ok(Arc::new(FirestoreSource::new(config)?)),
        SourceKind::File => {
            let path = config.path.clone().unwrap_or_default();
            Ok(Arc::new(FileSource::new(path)))
        }
    }
}
