//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! common invariants on observed weather series.

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that a flat series divides into whole days of `n_attributes` values.
///
/// Records one message when `n_attributes` is zero and one when the length
/// is not a multiple of it.
pub(crate) fn validate_shape(values_len: usize, n_attributes: usize) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if n_attributes == 0 {
        c.push("n_attributes must be at least 1");
        return c;
    }

    if values_len % n_attributes != 0 {
        c.push(format!(
            "series length {values_len} is not a multiple of {n_attributes} attributes"
        ));
    }

    c
}

/// Check that every value in the series is finite.
///
/// Records one message per offending value, located by day and attribute.
/// Assumes the shape is valid (shape validation is handled separately by
/// [`validate_shape`]).
pub(crate) fn validate_finite(values: &[f64], n_attributes: usize) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &val) in values.iter().enumerate() {
        if !val.is_finite() {
            c.push(format!(
                "non-finite value at day {}, attribute {}: {val}",
                i / n_attributes,
                i % n_attributes
            ));
        }
    }

    c
}
