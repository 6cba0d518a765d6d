//! Service layer providing the manufacturer/model catalogue operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Maps entities to flat transfer objects (`dto`) so nesting never recurses.

pub mod errors;
pub mod dto;
pub mod manufacturer_service;
pub mod model_service;
#[cfg(test)]
pub mod test_support;
