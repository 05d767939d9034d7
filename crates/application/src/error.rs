//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Upstream payload is readable but inconsistent
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::InvalidMeasurement("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid measurement: x");
    }

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("smhi down".to_string());
        assert_eq!(err.to_string(), "External service error: smhi down");
    }

    #[test]
    fn invalid_response_message() {
        let err = ApplicationError::InvalidResponse("duplicate station key 1".to_string());
        assert_eq!(err.to_string(), "Invalid response: duplicate station key 1");
    }
}
