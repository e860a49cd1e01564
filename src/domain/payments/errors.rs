//! Payment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Errors raised while assembling payment views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// No billing account exists for this member.
    #[error("No payment account found for member {0}")]
    AccountNotFound(MemberId),

    /// A filter value from the page could not be parsed.
    #[error("Invalid payment filter: {0}")]
    InvalidFilter(String),

    /// The payment source failed.
    #[error("Payment data unavailable: {0}")]
    Infrastructure(String),
}

impl PaymentError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::AccountNotFound(_) => ErrorCode::PaymentNotFound,
            PaymentError::InvalidFilter(_) => ErrorCode::ValidationFailed,
            PaymentError::Infrastructure(_) => ErrorCode::DataSourceUnavailable,
        }
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        PaymentError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for PaymentError {
    fn from(err: ValidationError) -> Self {
        PaymentError::InvalidFilter(err.to_string())
    }
}
