//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Products file settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// JSON file holding the product catalog; created on first write
    #[arg(long, env = "PRODUCTS_FILE", default_value = "productos.json")]
    pub products_file: PathBuf,
}
