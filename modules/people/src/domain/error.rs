use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Person not found: {id}")]
    PersonNotFound { id: Uuid },

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn person_not_found(id: Uuid) -> Self {
        Self::PersonNotFound { id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_variants() {
        let id = Uuid::new_v4();
        match DomainError::person_not_found(id) {
            DomainError::PersonNotFound { id: got } => assert_eq!(got, id),
            _ => panic!("Expected PersonNotFound error"),
        }

        match DomainError::validation("age", "out of range") {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "age");
                assert_eq!(message, "out of range");
            }
            _ => panic!("Expected Validation error"),
        }

        let err = DomainError::database("boom");
        assert_eq!(err.to_string(), "Database error: boom");
    }
}
