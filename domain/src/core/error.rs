//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Malformed dataset line {line}: expected 5 fields, found {fields}")]
    DataFormat { line: usize, fields: usize },

    #[error("Unrecognized prompt: {0}")]
    UnrecognizedPrompt(String),

    #[error("Cannot take the maximum of an empty number list")]
    EmptyInput,

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_display() {
        let error = DomainError::DataFormat { line: 3, fields: 4 };
        assert_eq!(
            error.to_string(),
            "Malformed dataset line 3: expected 5 fields, found 4"
        );
    }
}
