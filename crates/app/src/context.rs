//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::info;

use crate::domain::products::{FileProductsService, ProductsService, ProductsServiceError};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open products file")]
    Products(#[source] ProductsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context backed by the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing file cannot be read or parsed, so a
    /// corrupted catalog fails startup instead of the first request.
    pub async fn from_products_file(path: impl Into<PathBuf>) -> Result<Self, AppInitError> {
        let service = FileProductsService::new(path);

        let products = service
            .list_products()
            .await
            .map_err(AppInitError::Products)?;

        info!(
            path = %service.path().display(),
            products = products.len(),
            "products file opened"
        );

        Ok(Self::new(Arc::new(service)))
    }
}
