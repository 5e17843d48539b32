//! Products service errors.

use thiserror::Error;

use crate::domain::products::{store::StoreError, validation::Violation};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid product payload ({} violations)", .0.len())]
    ValidationFailed(Vec<Violation>),

    #[error("product not found")]
    NotFound,

    #[error("no product id left after {}", u64::MAX)]
    IdsExhausted,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<Vec<Violation>> for ProductsServiceError {
    fn from(violations: Vec<Violation>) -> Self {
        Self::ValidationFailed(violations)
    }
}
