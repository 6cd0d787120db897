use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("Found no {entity} with ID {id}.")) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::UniqueViolation(msg) => Self::Conflict(format!("already exists: {msg}")),
            ModelError::ForeignKeyViolation(msg) => Self::NotFound(format!("referenced record missing: {msg}")),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ModelError::from(e).into() }
}
