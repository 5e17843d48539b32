//! Product Errors

use tracing::error;

use catalogo_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) const LIST_FAILED: &str = "Error al leer los productos";
pub(crate) const GET_FAILED: &str = "Error al buscar el producto";
pub(crate) const CREATE_FAILED: &str = "Error al crear el producto";
pub(crate) const UPDATE_FAILED: &str = "Error al actualizar el producto";
pub(crate) const DELETE_FAILED: &str = "Error al eliminar el producto";

pub(crate) fn into_api_error(error: ProductsServiceError, context: &'static str) -> ApiError {
    match error {
        ProductsServiceError::ValidationFailed(violations) => {
            ApiError::InvalidPayload(violations.iter().map(ToString::to_string).collect())
        }
        ProductsServiceError::NotFound => ApiError::ProductNotFound,
        error @ (ProductsServiceError::IdsExhausted | ProductsServiceError::Store(_)) => {
            error!("{context}: {error}");

            ApiError::Internal {
                context,
                detail: Some(error.to_string()),
            }
        }
    }
}
