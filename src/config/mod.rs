mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{
    Config, ContactConfig, GalleryConfig, PageConfig, SourceConfig, SourceKind, ViewportConfig,
};
