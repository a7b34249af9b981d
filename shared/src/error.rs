use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure talking to the remote game service.
///
/// Fetch failures are recovered by seeding the library, write failures by
/// applying the change locally. Neither is ever shown as fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Remote returned no games")]
    Empty,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Game not found: {0}")]
    NotFound(String),

    #[error("Game already in library: {0}")]
    DuplicateId(String),
}

impl From<ValidationErrors> for LibraryError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] JsonError),

    #[error("Duplicate seed id: {0}")]
    DuplicateId(String),

    #[error("Seed game {id} uses unknown personality {personality}")]
    UnknownPersonality { id: String, personality: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Wrong admin password")]
    WrongPassword,
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_and_response_failures_read_differently() {
        assert_eq!(
            ServiceError::Encode("key must be a string".to_string()).to_string(),
            "Failed to encode request: key must be a string"
        );
        assert_eq!(
            ServiceError::Malformed("expected value".to_string()).to_string(),
            "Malformed response: expected value"
        );
    }

    #[test]
    fn test_duplicate_id_message() {
        assert_eq!(
            LibraryError::DuplicateId("local_1".to_string()).to_string(),
            "Game already in library: local_1"
        );
    }
}
