//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Declaration parse error.
    #[error("declaration parse error: {0}")]
    Parse(#[from] ffigen_schema::ParseError),

    /// Declaration graph error.
    #[error("declaration graph error: {0}")]
    Schema(#[from] ffigen_schema::SchemaError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CodegenError::from(ffigen_schema::ParseError::structure("bad dump"));
        assert_eq!(
            err.to_string(),
            "declaration parse error: invalid declaration structure: bad dump"
        );
    }
}
