//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{DELETE_FAILED, into_api_error},
        models::{ProductMessageResponse, parse_product_id},
    },
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductMessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(id) = parse_product_id(&id.into_inner()) else {
        return Err(ApiError::ProductNotFound);
    };

    let product = state
        .products
        .delete_product(id)
        .await
        .map_err(|error| into_api_error(error, DELETE_FAILED))?;

    Ok(Json(ProductMessageResponse::new(
        "Producto eliminado exitosamente",
        product,
    )))
}
