//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::{CREATE_FAILED, into_api_error},
        models::{ProductMessageResponse, ProductRequest},
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product payload"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductMessageResponse>, ApiError> {
    let request = ProductRequest::from_body(req).await?;

    let product = depot
        .obtain_or_500::<Arc<State>>()?
        .products
        .create_product(request.into())
        .await
        .map_err(|error| into_api_error(error, CREATE_FAILED))?;

    res.add_header(LOCATION, format!("/productos/{}", product.id), true)
        .or_500(CREATE_FAILED)?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductMessageResponse::new(
        "Producto creado exitosamente",
        product,
    )))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalogo_app::domain::products::{
        MockProductsService, ProductsServiceError,
        data::{Field, ProductPayload},
        validation::Violation,
    };

    use crate::{errors::ErrorResponse, test_helpers::products_service};

    use super::{super::tests::*, *};

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("productos").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_message() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|payload| {
                *payload
                    == ProductPayload {
                        nombre: Field::Present(" Pen ".to_string()),
                        precio: Field::Present(1.5),
                        descripcion: Field::Present("Blue ink pen".to_string()),
                        disponible: Field::Absent,
                    }
            })
            .return_once(|_| Ok(make_product(1)));

        let mut res = TestClient::post("http://example.com/productos")
            .json(&json!({ "nombre": " Pen ", "precio": 1.5, "descripcion": "Blue ink pen" }))
            .send(&make_service(repo))
            .await;

        let body: ProductMessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.mensaje, "Producto creado exitosamente");
        assert_eq!(body.producto.id, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_returns_location_header() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Ok(make_product(8)));

        let res = TestClient::post("http://example.com/productos")
            .json(&json!({ "nombre": "x", "precio": 1, "descripcion": "0123456789" }))
            .send(&make_service(repo))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(location, Some("/productos/8"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_wrongly_typed_fields_reach_validation() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|payload| payload.precio == Field::Invalid && payload.nombre == Field::Absent)
            .return_once(|_| {
                Err(ProductsServiceError::ValidationFailed(vec![
                    Violation::NombreRequired,
                    Violation::PrecioNotPositive,
                ]))
            });

        let res = TestClient::post("http://example.com/productos")
            .json(&json!({ "precio": "caro", "descripcion": "0123456789" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_validation_failure_returns_400_with_details() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::ValidationFailed(vec![
                Violation::NombreRequired,
                Violation::PrecioRequired,
                Violation::DescripcionRequired,
            ]))
        });

        let mut res = TestClient::post("http://example.com/productos")
            .json(&json!({}))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Datos inválidos");
        assert_eq!(
            body.detalles,
            Some(vec![
                "El campo nombre es obligatorio".to_string(),
                "El campo precio es obligatorio".to_string(),
                "El campo descripción es obligatorio".to_string(),
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_body_reports_missing_fields() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|payload| *payload == ProductPayload::default())
            .return_once(|_| {
                Err(ProductsServiceError::ValidationFailed(vec![
                    Violation::NombreRequired,
                    Violation::PrecioRequired,
                    Violation::DescripcionRequired,
                ]))
            });

        let mut res = TestClient::post("http://example.com/productos")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Datos inválidos");
        assert_eq!(body.detalles.map(|d| d.len()), Some(3));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400_json() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/productos")
            .text("{ nombre: ")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Cuerpo de la petición inválido");
        assert!(body.detalle.is_some(), "the parse error is reported");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_exhausted_ids_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::IdsExhausted));

        let mut res = TestClient::post("http://example.com/productos")
            .json(&json!({ "nombre": "x", "precio": 1, "descripcion": "0123456789" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Error al crear el producto");

        Ok(())
    }
}
