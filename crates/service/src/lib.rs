//! Service layer providing the café lifecycle on top of models.
//! - `CafeRepository` is the narrow storage seam (create/list/fetch/delete).
//! - `CafeService` runs validation before anything reaches the store.

pub mod errors;
pub mod cafe;
#[cfg(test)]
pub mod test_support;
