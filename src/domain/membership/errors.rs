//! Membership-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Errors raised while assembling membership views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// No membership record exists for this member.
    #[error("No membership found for member {0}")]
    NotFound(MemberId),

    /// The record could not be interpreted.
    #[error("Invalid membership record field '{field}': {message}")]
    InvalidRecord { field: String, message: String },

    /// The record source failed.
    #[error("Membership data unavailable: {0}")]
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(member_id: MemberId) -> Self {
        MembershipError::NotFound(member_id)
    }

    pub fn invalid_record(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::InvalidRecord {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::InvalidRecord { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::DataSourceUnavailable,
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        MembershipError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownVariant { field, .. } => field.clone(),
        };
        MembershipError::invalid_record(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_member_not_found() {
        let err = MembershipError::not_found(MemberId::new());
        assert_eq!(err.code(), ErrorCode::MemberNotFound);
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: MembershipError =
            DomainError::new(ErrorCode::DataSourceUnavailable, "reader offline").into();
        assert_eq!(err.code(), ErrorCode::DataSourceUnavailable);
        assert!(err.to_string().contains("reader offline"));
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: MembershipError = ValidationError::invalid_format("end_date", "bad date").into();
        match err {
            MembershipError::InvalidRecord { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }
}
