use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SourceKind};

/// Car-rental showcase page in the terminal.
#[derive(Debug, Parser)]
#[command(name = "car-gallery", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/car-gallery/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read vehicles from a local JSON file instead of the document store
    #[arg(long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    /// Override the slider auto-advance period in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Fetch once, print the vehicle list and exit without opening the page
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.source_file {
            config.source.kind = SourceKind::File;
            config.source.path = Some(path.to_string_lossy().into_owned());
        }
        if let Some(ms) = self.interval_ms {
            config.gallery.interval_ms = ms;
        }
    }
}
