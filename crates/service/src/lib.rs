//! Service layer providing the customer/document operations on top of models.
//! - Each operation owns its session: a pooled connection, or a transaction
//!   for check-then-write flows, released on every exit path.
//! - Storage errors are classified into the public taxonomy (`Conflict`,
//!   `NotFound`, `Validation`) here, not in the HTTP layer.

pub mod errors;
pub mod auth;
pub mod pagination;
pub mod grahaka_service;
pub mod patra_service;
#[cfg(test)]
pub mod test_support;
