use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}
