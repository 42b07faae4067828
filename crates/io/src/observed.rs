//! Observed weather series container.

use crate::error::IoError;
use crate::validate;

/// Container for an observed daily weather series.
///
/// Values are stored flat in row-major day order: day `i`, attribute `j`
/// lives at `values[i * n_attributes + j]`. Construction validates the shape
/// and rejects non-finite values, so downstream classification can assume
/// clean input.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedSeries {
    /// Flat row-major values, `n_days * n_attributes` long.
    values: Vec<f64>,
    /// Number of attributes recorded per day.
    n_attributes: usize,
}

impl ObservedSeries {
    /// Creates a new `ObservedSeries` after validating inputs.
    ///
    /// An empty value slice is allowed and yields a zero-day series.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `n_attributes` is zero, if the
    /// length of `values` is not a multiple of `n_attributes`, or if any
    /// value is NaN or infinite.
    pub fn new(values: Vec<f64>, n_attributes: usize) -> Result<Self, IoError> {
        validate::validate_shape(values.len(), n_attributes).finish()?;
        validate::validate_finite(&values, n_attributes).finish()?;

        Ok(Self {
            values,
            n_attributes,
        })
    }

    /// Returns the number of observed days.
    pub fn n_days(&self) -> usize {
        self.values.len() / self.n_attributes
    }

    /// Returns the number of attributes recorded per day.
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }

    /// Returns the flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the values of one 0-based day.
    ///
    /// # Panics
    ///
    /// Panics if `day >= n_days()`.
    pub fn day(&self, day: usize) -> &[f64] {
        assert!(
            day < self.n_days(),
            "day must be < {}, got {day}",
            self.n_days()
        );
        let start = day * self.n_attributes;
        &self.values[start..start + self.n_attributes]
    }

    /// Iterates over the series one day at a time.
    pub fn iter_days(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_accessors() {
        let series = ObservedSeries::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(series.n_days(), 2);
        assert_eq!(series.n_attributes(), 3);
        assert_eq!(series.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(series.day(0), &[1.0, 2.0, 3.0]);
        assert_eq!(series.day(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn empty_series_has_zero_days() {
        let series = ObservedSeries::new(vec![], 5).unwrap();
        assert_eq!(series.n_days(), 0);
        assert_eq!(series.iter_days().count(), 0);
    }

    #[test]
    fn iter_days_yields_whole_days() {
        let series = ObservedSeries::new(vec![0.0, 1.0, 2.0, 3.0], 2).unwrap();
        let days: Vec<&[f64]> = series.iter_days().collect();
        assert_eq!(days, vec![&[0.0, 1.0][..], &[2.0, 3.0][..]]);
    }

    #[test]
    fn rejects_zero_attributes() {
        let err = ObservedSeries::new(vec![1.0], 0).unwrap_err();
        assert!(matches!(err, IoError::Validation { count: 1, .. }));
    }

    #[test]
    fn rejects_ragged_values() {
        let err = ObservedSeries::new(vec![1.0, 2.0, 3.0], 2).unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = ObservedSeries::new(vec![1.0, f64::NAN], 2).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("day 0, attribute 1"));
    }

    #[test]
    #[should_panic(expected = "day must be < 2, got 2")]
    fn day_out_of_range_panics() {
        let series = ObservedSeries::new(vec![1.0, 2.0], 1).unwrap();
        let _ = series.day(2);
    }
}
