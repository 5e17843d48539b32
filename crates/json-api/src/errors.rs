//! API error responses.

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body shared by every failure response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Short description of what went wrong
    pub error: String,

    /// Every validation violation, for invalid payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalles: Option<Vec<String>>,

    /// Underlying cause, for internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalle: Option<String>,
}

/// Failure outcome of a handler.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Datos inválidos")]
    InvalidPayload(Vec<String>),

    #[error("Cuerpo de la petición inválido")]
    MalformedBody(String),

    #[error("Producto no encontrado")]
    ProductNotFound,

    #[error("Ruta no encontrada")]
    RouteNotFound,

    #[error("{context}")]
    Internal {
        context: &'static str,
        detail: Option<String>,
    },
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::ProductNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = error.to_string();

        match error {
            ApiError::InvalidPayload(violations) => ErrorResponse {
                error: message,
                detalles: Some(violations),
                detalle: None,
            },
            ApiError::MalformedBody(detail) => ErrorResponse {
                error: message,
                detalles: None,
                detalle: Some(detail),
            },
            ApiError::Internal { detail, .. } => ErrorResponse {
                error: message,
                detalles: None,
                detalle: detail,
            },
            ApiError::ProductNotFound | ApiError::RouteNotFound => ErrorResponse {
                error: message,
                detalles: None,
                detalle: None,
            },
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse::from(self)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Invalid product payload"),
            (StatusCode::NOT_FOUND, "Product not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

/// Fallback for every request no route matched.
#[handler]
pub(crate) async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn invalid_payload_lists_every_violation() {
        let body = ErrorResponse::from(ApiError::InvalidPayload(vec![
            "uno".to_string(),
            "dos".to_string(),
        ]));

        assert_eq!(body.error, "Datos inválidos");
        assert_eq!(
            body.detalles,
            Some(vec!["uno".to_string(), "dos".to_string()])
        );
        assert_eq!(body.detalle, None);
    }

    #[test]
    fn internal_error_carries_context_and_detail() {
        let body = ErrorResponse::from(ApiError::Internal {
            context: "Error al leer los productos",
            detail: Some("disk on fire".to_string()),
        });

        assert_eq!(body.error, "Error al leer los productos");
        assert_eq!(body.detalle.as_deref(), Some("disk on fire"));
    }

    #[tokio::test]
    async fn test_route_not_found_returns_404_body() -> TestResult {
        let router = Router::new().push(Router::with_path("{**rest}").goal(route_not_found));

        let mut res = TestClient::get("http://example.com/nada/aqui")
            .send(&Service::new(router))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Ruta no encontrada");

        Ok(())
    }
}
