//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{GET_FAILED, into_api_error},
        models::{ProductResponse, parse_product_id},
    },
    state::State,
};

/// Get Product Handler
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(id) = parse_product_id(&id.into_inner()) else {
        return Err(ApiError::ProductNotFound);
    };

    let product = state
        .products
        .get_product(id)
        .await
        .map_err(|error| into_api_error(error, GET_FAILED))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalogo_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::{errors::ErrorResponse, test_helpers::products_service};

    use super::{super::tests::*, *};

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("productos/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_returns_product() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|id| *id == ProductId::new(5))
            .return_once(|_| Ok(make_product(5)));

        let mut res = TestClient::get("http://example.com/productos/5")
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);
        assert_eq!(body.fecha_ingreso, "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_not_found_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/productos/77")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Producto no encontrado");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_non_numeric_id_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        let res = TestClient::get("http://example.com/productos/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
