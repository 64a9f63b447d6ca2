//! Service layer providing the cafe data-access contract on top of models.
//! - `CafeStore` is the persistence seam; `SeaOrmCafeStore` backs it with SQLite.
//! - `CafeService` adds the shared-secret policy for deletions.
//! - Form input is normalised into `models::cafe::NewCafe` before it reaches a store.

pub mod errors;
pub mod cafe;
#[cfg(test)]
pub mod test_support;
