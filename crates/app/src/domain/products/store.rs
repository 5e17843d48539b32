//! Products Store
//!
//! The whole catalog lives in one JSON file holding an ordered array of
//! products. Every call reads or rewrites the file in full.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    process,
};

use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::domain::products::records::ProductRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("products file {path} is corrupted: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("products file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("products could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing file is an empty catalog.
    pub(crate) async fn load(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "products file missing, starting empty");

                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupted {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the full collection.
    ///
    /// The new content is written and synced to a temporary sibling first and
    /// then renamed over the target, so readers see either the old or the new
    /// file.
    pub(crate) async fn save(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(products).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp = self.temp_path();

        if let Err(error) = write_synced(&tmp, &bytes).await {
            remove_quietly(&tmp).await;

            return Err(self.io_error(error));
        }

        if let Err(error) = fs::rename(&tmp, &self.path).await {
            remove_quietly(&tmp).await;

            return Err(self.io_error(error));
        }

        debug!(
            path = %self.path.display(),
            products = products.len(),
            "products file written"
        );

        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "products".into(), |name| name.to_string_lossy());

        self.path
            .with_file_name(format!(".{file_name}.tmp.{}", process::id()))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;

    file.write_all(bytes).await?;
    file.sync_all().await
}

async fn remove_quietly(path: &Path) {
    if let Err(error) = fs::remove_file(path).await {
        debug!(path = %path.display(), "could not remove temporary file: {error}");
    }
}
