//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{UPDATE_FAILED, into_api_error},
        models::{ProductMessageResponse, ProductRequest, parse_product_id},
    },
    state::State,
};

/// Product Update Handler
///
/// Only the fields present in the body are changed.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductMessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(id) = parse_product_id(&id.into_inner()) else {
        return Err(ApiError::ProductNotFound);
    };

    let request = ProductRequest::from_body(req).await?;

    let product = state
        .products
        .update_product(id, request.into())
        .await
        .map_err(|error| into_api_error(error, UPDATE_FAILED))?;

    Ok(Json(ProductMessageResponse::new(
        "Producto actualizado exitosamente",
        product,
    )))
}
