use thiserror::Error;

use crate::cycle::ValidationError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a cycle lookup miss.
    pub fn cycle_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Cycle",
            id: id.to_string(),
        }
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidData(error.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::cycle_not_found("abc-123");
        assert_eq!(error.to_string(), "Cycle not found: abc-123");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table");
    }

    #[test]
    fn test_serialization_display() {
        let error = RepositoryError::Serialization("missing required field".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: missing required field"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("date out of range".to_string());
        assert_eq!(error.to_string(), "Invalid data: date out of range");
    }

    #[test]
    fn test_validation_error_converts_to_invalid_data() {
        let error: RepositoryError = ValidationError::PeriodLengthZero.into();
        assert_eq!(
            error,
            RepositoryError::InvalidData("period length must be at least 1 day".to_string())
        );
    }
}
