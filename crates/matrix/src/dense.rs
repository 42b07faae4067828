//! Dense row-major matrix with 1-based indexing.

use tracing::debug;

use crate::error::MatrixError;

/// Tolerance for the column-stochasticity check.
///
/// A column passes when its sum is within this distance of 1.0.
pub const STOCHASTIC_TOLERANCE: f64 = 1e-4;

/// Dense `f64` matrix addressed with 1-based row and column indices.
///
/// Rows and columns run `1..=rows()` and `1..=columns()`. The 1-based
/// convention is part of the public contract: transition matrices store the
/// probability of moving to state `s` from state `p` at
/// `(row = s + 1, column = p + 1)`, where `s` and `p` are 0-based state
/// indices. Storage is row-major and newly created matrices are zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows >= 1 && columns >= 1,
            "matrix dimensions must be at least 1x1, got {rows}x{columns}"
        );
        Self {
            rows,
            columns,
            data: vec![0.0; rows * columns],
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the entry at the given 1-based position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside `1..=rows()` / `1..=columns()`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(
            (1..=self.rows).contains(&row),
            "row must be 1..={}, got {row}",
            self.rows
        );
        assert!(
            (1..=self.columns).contains(&column),
            "column must be 1..={}, got {column}",
            self.columns
        );
        self.data[(row - 1) * self.columns + (column - 1)]
    }

    /// Sets the entry at the given 1-based position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside `1..=rows()` / `1..=columns()`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        assert!(
            (1..=self.rows).contains(&row),
            "row must be 1..={}, got {row}",
            self.rows
        );
        assert!(
            (1..=self.columns).contains(&column),
            "column must be 1..={}, got {column}",
            self.columns
        );
        self.data[(row - 1) * self.columns + (column - 1)] = value;
    }

    /// Returns the sum of the entries in a 1-based column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is outside `1..=columns()`.
    pub fn column_sum(&self, column: usize) -> f64 {
        (1..=self.rows).map(|row| self.get(row, column)).sum()
    }

    /// Multiplies `self` by `other` and returns the product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] when `self.columns()` does
    /// not equal `other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }
        let mut product = Matrix::new(self.rows, other.columns);
        for row in 1..=self.rows {
            for column in 1..=other.columns {
                let mut total = 0.0;
                for k in 1..=self.columns {
                    total += self.get(row, k) * other.get(k, column);
                }
                product.set(row, column, total);
            }
        }
        Ok(product)
    }

    /// Returns true when every column sums to 1.0 within `tolerance`.
    ///
    /// Callers that estimate transition matrices check with
    /// [`STOCHASTIC_TOLERANCE`].
    pub fn is_column_stochastic(&self, tolerance: f64) -> bool {
        for column in 1..=self.columns {
            let sum = self.column_sum(column);
            if (sum - 1.0).abs() > tolerance {
                debug!(column, sum, "column sum deviates from 1.0");
                return false;
            }
        }
        true
    }

    /// Rescales every column to sum to 1.0.
    ///
    /// A column whose sum is exactly zero has no observations behind it and
    /// is replaced by the uniform distribution `1 / rows()`, so the result is
    /// always column-stochastic for matrices with non-negative entries.
    pub fn normalize_columns(&mut self) {
        let uniform = 1.0 / self.rows as f64;
        for column in 1..=self.columns {
            let total = self.column_sum(column);
            if total == 0.0 {
                for row in 1..=self.rows {
                    self.set(row, column, uniform);
                }
            } else {
                for row in 1..=self.rows {
                    let value = self.get(row, column);
                    self.set(row, column, value / total);
                }
            }
        }
    }
}
