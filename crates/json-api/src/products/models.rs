//! Product Models

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use catalogo_app::domain::products::{
    data::{Field, ProductPayload},
    records::{ProductId, ProductRecord},
};

use crate::errors::ApiError;

/// Product Request
///
/// Used for both create and update; every field is optional on the wire and
/// checked by the catalog service.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name
    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub nombre: Field<String>,

    /// Unit price, greater than zero
    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub precio: Field<f64>,

    /// Description of at least ten characters
    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub descripcion: Field<String>,

    /// Whether the product can be sold; defaults to true on create
    #[serde(default)]
    #[salvo(schema(value_type = Option<bool>))]
    pub disponible: Field<bool>,
}

impl ProductRequest {
    /// Read the request body.
    ///
    /// A missing or blank body is an empty request, whatever the content
    /// type. Anything else must be a JSON object.
    pub(crate) async fn from_body(req: &mut Request) -> Result<Self, ApiError> {
        let body = req
            .payload()
            .await
            .map_err(|error| ApiError::MalformedBody(error.to_string()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object)
                .map_err(|error| ApiError::MalformedBody(error.to_string())),
            Ok(_) => Err(ApiError::MalformedBody(
                "el cuerpo debe ser un objeto JSON".to_string(),
            )),
            Err(error) => Err(ApiError::MalformedBody(error.to_string())),
        }
    }
}

impl From<ProductRequest> for ProductPayload {
    fn from(request: ProductRequest) -> Self {
        ProductPayload {
            nombre: request.nombre,
            precio: request.precio,
            descripcion: request.descripcion,
            disponible: request.disponible,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: u64,

    /// Product name
    pub nombre: String,

    /// Unit price
    pub precio: f64,

    /// Product description
    pub descripcion: String,

    /// Whether the product is available
    pub disponible: bool,

    /// The date and time the product was added, ISO-8601
    pub fecha_ingreso: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_inner(),
            nombre: product.nombre,
            precio: product.precio,
            descripcion: product.descripcion,
            disponible: product.disponible,
            fecha_ingreso: product.fecha_ingreso.to_string(),
        }
    }
}

/// Product Message Response
///
/// Returned by create, update and delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductMessageResponse {
    /// Outcome message
    pub mensaje: String,

    /// The product as it was written or removed
    pub producto: ProductResponse,
}

impl ProductMessageResponse {
    pub(crate) fn new(mensaje: &str, product: ProductRecord) -> Self {
        Self {
            mensaje: mensaje.to_string(),
            producto: product.into(),
        }
    }
}

/// Parse a path segment as a product id; anything else matches no product.
///
/// The whole segment must be digits. `1abc` is not read as id 1, as a
/// prefix parse would.
pub(crate) fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.parse().ok()
}
