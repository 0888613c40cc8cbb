use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Datastore-level failures. Surfaced as-is to the service layer; never
/// retried, never mapped to a fallback connection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<DieselError> for StorageError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => StorageError::NotFound,

            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation => {
                        StorageError::ConstraintViolation(message)
                    }
                    _ => StorageError::Database(message),
                }
            }

            DieselError::QueryBuilderError(e) => {
                StorageError::Database(format!("Query builder error: {e}"))
            }

            DieselError::SerializationError(e) => {
                StorageError::Database(format!("Serialization error: {e}"))
            }

            DieselError::DeserializationError(e) => {
                StorageError::Database(format!("Deserialization error: {e}"))
            }

            _ => StorageError::Unexpected(format!("Unexpected diesel error: {err}")),
        }
    }
}

impl From<R2D2Error> for StorageError {
    fn from(err: R2D2Error) -> Self {
        StorageError::Connection(err.to_string())
    }
}

impl From<PoolError> for StorageError {
    fn from(err: PoolError) -> Self {
        StorageError::Connection(err.to_string())
    }
}
