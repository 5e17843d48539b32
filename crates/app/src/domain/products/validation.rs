//! Product payload validation.

use thiserror::Error;

use crate::domain::products::data::{Field, ProductPayload};

/// Minimum number of characters in a product description.
///
/// Counted in Unicode scalar values, so an emoji outside the BMP counts once
/// rather than as two UTF-16 units.
pub const MIN_DESCRIPCION_CHARS: usize = 10;

/// Which rule set applies to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every field except `disponible` is required.
    Create,

    /// Nothing is required; present fields must still be valid.
    Update,
}

impl ValidationMode {
    const fn requires_fields(self) -> bool {
        matches!(self, Self::Create)
    }
}

/// A single reason a payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("El campo nombre es obligatorio")]
    NombreRequired,

    #[error("El campo nombre no puede estar vacío")]
    NombreEmpty,

    #[error("El campo nombre debe ser un texto")]
    NombreNotText,

    #[error("El campo precio es obligatorio")]
    PrecioRequired,

    #[error("El precio debe ser un número positivo mayor a cero")]
    PrecioNotPositive,

    #[error("El campo descripción es obligatorio")]
    DescripcionRequired,

    #[error("La descripción debe tener un mínimo de 10 caracteres")]
    DescripcionTooShort,

    #[error("El campo disponible debe ser un valor booleano (true o false)")]
    DisponibleNotBoolean,
}

/// Check `payload` against the field rules for `mode`.
///
/// Every rule is evaluated; an empty result means the payload is acceptable.
pub fn validate(payload: &ProductPayload, mode: ValidationMode) -> Vec<Violation> {
    let required = mode.requires_fields();
    let mut violations = Vec::new();

    match &payload.nombre {
        Field::Absent if required => violations.push(Violation::NombreRequired),
        Field::Present(nombre) if nombre.trim().is_empty() => {
            // An empty string is both missing and blank on create; whitespace
            // only counts as blank.
            if required && nombre.is_empty() {
                violations.push(Violation::NombreRequired);
            }

            violations.push(Violation::NombreEmpty);
        }
        Field::Invalid => violations.push(Violation::NombreNotText),
        Field::Absent | Field::Present(_) => {}
    }

    match payload.precio {
        Field::Absent if required => violations.push(Violation::PrecioRequired),
        Field::Present(precio) if !(precio.is_finite() && precio > 0.0) => {
            violations.push(Violation::PrecioNotPositive);
        }
        Field::Invalid => violations.push(Violation::PrecioNotPositive),
        Field::Absent | Field::Present(_) => {}
    }

    match &payload.descripcion {
        Field::Absent if required => violations.push(Violation::DescripcionRequired),
        Field::Present(descripcion) if descripcion.chars().count() < MIN_DESCRIPCION_CHARS => {
            violations.push(Violation::DescripcionTooShort);
        }
        Field::Invalid => violations.push(Violation::DescripcionTooShort),
        Field::Absent | Field::Present(_) => {}
    }

    if payload.disponible == Field::Invalid {
        violations.push(Violation::DisponibleNotBoolean);
    }

    violations
}
