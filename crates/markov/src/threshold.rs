//! Attribute cutoffs and series classification.
//!
//! Holds the per-attribute lower/upper cutoffs and classifies raw daily
//! measurements into [`Level`] values.

use crate::error::MarkovError;
use crate::state::Level;

/// Lower and upper cutoffs for one attribute.
///
/// Values at or below `lower` classify as [`Level::Low`], values above
/// `upper` as [`Level::High`], everything in between as [`Level::Medium`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    /// The low/medium boundary (inclusive on the low side).
    pub lower: f64,
    /// The medium/high boundary (inclusive on the medium side).
    pub upper: f64,
}

/// Resolved per-attribute cutoffs for day classification.
///
/// The table's width fixes the number of attributes per day; attribute `i`
/// of every day is classified with the `i`-th cutoff pair.
#[derive(Debug, Clone)]
pub struct CutoffTable {
    cutoffs: Vec<Cutoffs>,
}

impl CutoffTable {
    /// Creates a cutoff table, one pair per attribute in day order.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::EmptyCutoffs`] for an empty list and
    /// [`MarkovError::InvalidCutoff`] when a pair is non-finite or has
    /// `lower > upper`.
    pub fn new(cutoffs: Vec<Cutoffs>) -> Result<Self, MarkovError> {
        if cutoffs.is_empty() {
            return Err(MarkovError::EmptyCutoffs);
        }
        for (attribute, pair) in cutoffs.iter().enumerate() {
            if !pair.lower.is_finite() || !pair.upper.is_finite() || pair.lower > pair.upper {
                return Err(MarkovError::InvalidCutoff {
                    attribute,
                    lower: pair.lower,
                    upper: pair.upper,
                });
            }
        }
        Ok(Self { cutoffs })
    }

    /// Returns the number of attributes this table classifies.
    pub fn width(&self) -> usize {
        self.cutoffs.len()
    }

    /// Returns the cutoff pairs in attribute order.
    pub fn cutoffs(&self) -> &[Cutoffs] {
        &self.cutoffs
    }

    /// Classifies a single value for one attribute.
    ///
    /// Both comparisons are strict: a value exactly at `upper` is Medium and
    /// a value exactly at `lower` is Low.
    ///
    /// # Precondition
    ///
    /// `attribute` must be `< width()`. This is **not** validated at runtime
    /// (hot path, called per value).
    #[inline]
    pub fn classify_value(&self, attribute: usize, value: f64) -> Level {
        let pair = &self.cutoffs[attribute];
        if value > pair.upper {
            Level::High
        } else if value > pair.lower {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// Classifies one day of raw values into a level tuple.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::WidthMismatch`] when `values` does not have one
    /// entry per attribute.
    pub fn classify_day(&self, values: &[f64]) -> Result<Vec<Level>, MarkovError> {
        if values.len() != self.width() {
            return Err(MarkovError::WidthMismatch {
                expected: self.width(),
                got: values.len(),
            });
        }
        Ok(values
            .iter()
            .enumerate()
            .map(|(attribute, &value)| self.classify_value(attribute, value))
            .collect())
    }

    /// Classifies a flat row-major series into per-day level tuples.
    ///
    /// `values` holds day 0's attributes first, then day 1's, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::LengthMismatch`] when the length is not a
    /// multiple of [`width`](Self::width).
    pub fn classify_series(&self, values: &[f64]) -> Result<Vec<Vec<Level>>, MarkovError> {
        if values.len() % self.width() != 0 {
            return Err(MarkovError::LengthMismatch {
                len: values.len(),
                width: self.width(),
            });
        }
        Ok(values
            .chunks_exact(self.width())
            .map(|day| {
                day.iter()
                    .enumerate()
                    .map(|(attribute, &value)| self.classify_value(attribute, value))
                    .collect()
            })
            .collect())
    }
}
