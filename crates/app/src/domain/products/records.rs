//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::products::data::{Field, ProductPayload};

/// Product Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Identifier handed to the first product of an empty catalog.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Next identifier after the highest one currently stored.
    ///
    /// Identifiers freed by deleting the newest product are handed out again.
    /// `None` once the highest stored id is `u64::MAX`.
    pub fn next_after<'a>(ids: impl IntoIterator<Item = &'a ProductId>) -> Option<Self> {
        match ids.into_iter().max() {
            Some(max) => max.0.checked_add(1).map(Self),
            None => Some(Self::FIRST),
        }
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Product Record
///
/// Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub disponible: bool,
    pub fecha_ingreso: Timestamp,
}

impl ProductRecord {
    /// Overlay the fields present in `payload`.
    ///
    /// The payload must already have passed update validation; `id` and
    /// `fecha_ingreso` are never touched.
    pub(crate) fn merge(&mut self, payload: ProductPayload) {
        if let Field::Present(nombre) = payload.nombre {
            self.nombre = nombre.trim().to_owned();
        }

        if let Field::Present(precio) = payload.precio {
            self.precio = precio;
        }

        if let Field::Present(descripcion) = payload.descripcion {
            self.descripcion = descripcion;
        }

        if let Field::Present(disponible) = payload.disponible {
            self.disponible = disponible;
        }
    }
}
