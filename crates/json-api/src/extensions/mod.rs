//! Handler helpers that turn depot and result failures into [`ApiError`]s.
//!
//! [`ApiError`]: crate::errors::ApiError

mod depot;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
