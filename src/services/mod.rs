//! Orchestration layer between the HTTP surface and the repository.

use thiserror::Error;

use crate::domain::types::ValidationError;
use crate::repository::errors::StorageError;

pub mod inquiries;

/// Errors surfaced by the service layer. Validation and storage
/// failures pass through unchanged; the routes decide how each maps to
/// an HTTP status.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
