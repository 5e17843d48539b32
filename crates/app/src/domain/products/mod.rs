//! Products

pub mod data;
pub mod errors;
pub mod records;
pub mod service;
mod store;
pub mod validation;

pub use errors::ProductsServiceError;
pub use service::*;
pub use store::StoreError;
