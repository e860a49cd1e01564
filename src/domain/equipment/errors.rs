//! Equipment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, EquipmentId, ErrorCode, ValidationError};

/// Errors raised while assembling equipment views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipmentError {
    #[error("No equipment with id {0}")]
    NotFound(EquipmentId),

    #[error("Invalid equipment filter: {0}")]
    InvalidFilter(String),

    #[error("Equipment data unavailable: {0}")]
    Infrastructure(String),
}

impl EquipmentError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EquipmentError::NotFound(_) => ErrorCode::EquipmentNotFound,
            EquipmentError::InvalidFilter(_) => ErrorCode::ValidationFailed,
            EquipmentError::Infrastructure(_) => ErrorCode::DataSourceUnavailable,
        }
    }
}

impl From<DomainError> for EquipmentError {
    fn from(err: DomainError) -> Self {
        EquipmentError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for EquipmentError {
    fn from(err: ValidationError) -> Self {
        EquipmentError::InvalidFilter(err.to_string())
    }
}
