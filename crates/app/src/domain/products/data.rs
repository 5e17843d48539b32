//! Products Data

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::products::{
    records::{ProductId, ProductRecord},
    validation::{ValidationMode, Violation, validate},
};

/// A single incoming payload field.
///
/// Deserializing never fails: a missing key is `Absent` (via `#[serde(default)]`)
/// and a value of the wrong JSON type, `null` included, is `Invalid`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
    #[default]
    Absent,
    Invalid,
    Present(T),
}

impl<T> Field<T> {
    /// The value when present and well-typed.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Invalid => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Ok(T::deserialize(value).map_or(Field::Invalid, Field::Present))
    }
}

/// Product Payload
///
/// The writable fields of a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub nombre: Field<String>,

    #[serde(default)]
    pub precio: Field<f64>,

    #[serde(default)]
    pub descripcion: Field<String>,

    #[serde(default)]
    pub disponible: Field<bool>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewProduct {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub disponible: bool,
}

impl NewProduct {
    pub(crate) fn into_record(self, id: ProductId, fecha_ingreso: Timestamp) -> ProductRecord {
        ProductRecord {
            id,
            nombre: self.nombre,
            precio: self.precio,
            descripcion: self.descripcion,
            disponible: self.disponible,
            fecha_ingreso,
        }
    }
}

impl TryFrom<ProductPayload> for NewProduct {
    type Error = Vec<Violation>;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let violations = validate(&payload, ValidationMode::Create);

        match payload {
            ProductPayload {
                nombre: Field::Present(nombre),
                precio: Field::Present(precio),
                descripcion: Field::Present(descripcion),
                disponible,
            } if violations.is_empty() => Ok(NewProduct {
                nombre: nombre.trim().to_owned(),
                precio,
                descripcion,
                disponible: disponible.into_option().unwrap_or(true),
            }),
            _ => Err(violations),
        }
    }
}
