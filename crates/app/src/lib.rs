//! Product catalog domain and JSON file persistence.

pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
