//! Error types for matrix operations.

use thiserror::Error;

/// Errors that can occur during matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The inner dimensions of a product do not agree.
    #[error(
        "dimension mismatch: cannot multiply {left_rows}x{left_columns} by {right_rows}x{right_columns}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::DimensionMismatch {
            left_rows: 2,
            left_columns: 3,
            right_rows: 2,
            right_columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: cannot multiply 2x3 by 2x3"
        );
    }
}
