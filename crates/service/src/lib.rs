//! Service layer providing the product CRUD contract on top of models.
//! - Separates business rules from data access behind `ProductRepository`.
//! - Accepts only validated `ProductDraft`s; validation lives in `models`.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod product;
