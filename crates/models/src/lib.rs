//! SeaORM entities for customers (`grahaka`) and their documents (`patra`),
//! plus connection setup.

pub mod errors;
pub mod db;
pub mod grahaka;
pub mod patra;
