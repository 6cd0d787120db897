//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Verifies customer credentials and issues the bearer tokens checked by the
//! HTTP layer's token middleware.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;
pub mod repo;

pub use service::AuthService;
