//! Products service.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::products::{
    data::{NewProduct, ProductPayload},
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
    store::JsonFileStore,
    validation::{ValidationMode, validate},
};

/// Catalog backed by a single JSON file.
///
/// Create, update and delete hold a writer lock across their whole
/// load-modify-save cycle, so two creates can never observe the same
/// snapshot and hand out the same id. Reads skip the lock; saves replace the
/// file atomically. Use one instance per file.
#[derive(Debug, Clone)]
pub struct FileProductsService {
    store: JsonFileStore,
    writer: Arc<Mutex<()>>,
}

impl FileProductsService {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

#[async_trait]
impl ProductsService for FileProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.store.load().await?)
    }

    async fn list_available_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut products = self.store.load().await?;

        products.retain(|product| product.disponible);

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.store
            .load()
            .await?
            .into_iter()
            .find(|record| record.id == product)
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = NewProduct::try_from(payload)?;

        let _writer = self.writer.lock().await;

        let mut products = self.store.load().await?;

        let id = ProductId::next_after(products.iter().map(|record| &record.id))
            .ok_or(ProductsServiceError::IdsExhausted)?;
        let created = product.into_record(id, Timestamp::now());

        products.push(created.clone());

        self.store.save(&products).await?;

        info!(product = %created.id, "product created");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let _writer = self.writer.lock().await;

        let mut products = self.store.load().await?;

        let Some(record) = products.iter_mut().find(|record| record.id == product) else {
            return Err(ProductsServiceError::NotFound);
        };

        let violations = validate(&payload, ValidationMode::Update);

        if !violations.is_empty() {
            return Err(ProductsServiceError::ValidationFailed(violations));
        }

        record.merge(payload);

        let updated = record.clone();

        self.store.save(&products).await?;

        info!(product = %updated.id, "product updated");

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let _writer = self.writer.lock().await;

        let mut products = self.store.load().await?;

        let Some(index) = products.iter().position(|record| record.id == product) else {
            return Err(ProductsServiceError::NotFound);
        };

        let deleted = products.remove(index);

        self.store.save(&products).await?;

        info!(product = %deleted.id, "product deleted");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product in insertion order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products flagged as available, in insertion order.
    async fn list_available_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validates the payload and appends a new product with the next id.
    async fn create_product(
        &self,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Merges the fields present in the payload into an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        payload: ProductPayload,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Removes a product, returning it.
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
