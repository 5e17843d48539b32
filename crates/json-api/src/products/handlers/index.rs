//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{LIST_FAILED, into_api_error},
        models::ProductResponse,
    },
    state::State,
};

/// Product Index Handler
///
/// Returns every product in insertion order.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "All products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = depot
        .obtain_or_500::<Arc<State>>()?
        .products
        .list_products()
        .await
        .map_err(|error| into_api_error(error, LIST_FAILED))?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
