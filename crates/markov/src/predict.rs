//! One-step projection and ranking of next-day outcomes.

use std::cmp::Ordering;

use aeolus_matrix::Matrix;
use tracing::debug;

use crate::error::MarkovError;
use crate::state::{Level, StateSpace};

/// Default likelihood threshold for calling an outcome significant.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.01;

/// One candidate next-day state with its likelihood.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// 0-based joint state index.
    index: usize,
    /// Decoded per-attribute levels of the state.
    levels: Vec<Level>,
    /// Probability of this being tomorrow's state.
    likelihood: f64,
}

impl Outcome {
    pub(crate) fn new(index: usize, levels: Vec<Level>, likelihood: f64) -> Self {
        Self {
            index,
            levels,
            likelihood,
        }
    }

    /// Returns the 0-based joint state index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the per-attribute levels of the state, in attribute order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the probability of this being tomorrow's state.
    pub fn likelihood(&self) -> f64 {
        self.likelihood
    }
}

/// Likelihood mass accumulated per level for one attribute.
///
/// Summing an attribute's mass over all candidate states marginalizes the
/// joint distribution down to that attribute alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeMarginal {
    masses: [f64; 3],
}

impl AttributeMarginal {
    /// Returns the mass assigned to one level.
    pub fn mass(&self, level: Level) -> f64 {
        self.masses[level.as_index()]
    }

    /// Returns the masses in [`Level::ALL`] order.
    pub fn masses(&self) -> &[f64; 3] {
        &self.masses
    }

    /// Returns the most likely level and its mass.
    ///
    /// Scans High, then Medium, then Low against a running best that starts
    /// at zero, taking a level only when its mass is strictly greater. Equal
    /// masses therefore keep the earlier-scanned level, and an all-zero
    /// marginal reports `(Low, 0.0)`.
    pub fn best_level(&self) -> (Level, f64) {
        let mut best = 0.0;
        let mut level = Level::Low;
        if self.mass(Level::High) > best {
            best = self.mass(Level::High);
            level = Level::High;
        }
        if self.mass(Level::Medium) > best {
            best = self.mass(Level::Medium);
            level = Level::Medium;
        }
        if self.mass(Level::Low) > best {
            best = self.mass(Level::Low);
            level = Level::Low;
        }
        (level, best)
    }
}

/// Ranked next-day outlook for one current state.
#[derive(Debug, Clone)]
pub struct Prediction {
    outcomes: Vec<Outcome>,
    marginals: Vec<AttributeMarginal>,
}

impl Prediction {
    pub(crate) fn new(outcomes: Vec<Outcome>, marginals: Vec<AttributeMarginal>) -> Self {
        Self {
            outcomes,
            marginals,
        }
    }

    /// Candidate next states with nonzero likelihood, most likely first.
    ///
    /// Outcomes of equal likelihood stay in ascending state-index order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Per-attribute likelihood masses, in attribute order.
    pub fn marginals(&self) -> &[AttributeMarginal] {
        &self.marginals
    }

    /// Returns the outcomes whose likelihood is at least `threshold`.
    ///
    /// The comparison is inclusive: an outcome exactly at the threshold
    /// counts as significant.
    pub fn significant(&self, threshold: f64) -> Vec<&Outcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.likelihood >= threshold)
            .collect()
    }
}

/// Projects the chain one step and ranks tomorrow's candidate states.
///
/// Encodes `today`, multiplies `matrix` by the corresponding one-hot column
/// vector, and collects every next state with nonzero likelihood. Likelihood
/// mass is also accumulated per attribute and level, so the outlook can be
/// read one attribute at a time.
///
/// # Errors
///
/// Returns [`MarkovError::ShapeMismatch`] when the matrix dimensions do not
/// match the state space, [`MarkovError::UnsupportedArity`] when the space
/// has more levels per attribute than [`Level`] can name, and encoding
/// errors when `today` does not fit the space.
pub fn predict(
    matrix: &Matrix,
    today: &[Level],
    space: &StateSpace,
) -> Result<Prediction, MarkovError> {
    let n = space.n_states();
    if matrix.rows() != n || matrix.columns() != n {
        return Err(MarkovError::ShapeMismatch {
            rows: matrix.rows(),
            columns: matrix.columns(),
            n_states: n,
        });
    }
    if space.arity() > Level::ALL.len() {
        return Err(MarkovError::UnsupportedArity {
            arity: space.arity(),
            max: Level::ALL.len(),
        });
    }

    let current = space.encode_levels(today)?;
    let mut one_hot = Matrix::new(n, 1);
    one_hot.set(current + 1, 1, 1.0);
    let projected = matrix.multiply(&one_hot)?;

    let mut outcomes = Vec::new();
    let mut marginals = vec![AttributeMarginal { masses: [0.0; 3] }; space.width()];
    let mut digits = vec![0usize; space.width()];
    for row in 1..=n {
        let likelihood = projected.get(row, 1);
        space.decode_into(row - 1, &mut digits)?;
        for (attribute, &digit) in digits.iter().enumerate() {
            marginals[attribute].masses[digit] += likelihood;
        }
        if likelihood == 0.0 {
            continue;
        }
        let levels: Vec<Level> = digits
            .iter()
            .map(|&digit| Level::from_index(digit).expect("digits bounded by checked arity"))
            .collect();
        outcomes.push(Outcome::new(row - 1, levels, likelihood));
    }

    // Stable sort, and rows were visited in ascending state order.
    outcomes.sort_by(|a, b| {
        b.likelihood
            .partial_cmp(&a.likelihood)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        current_state = current,
        candidates = outcomes.len(),
        "projected one step ahead"
    );

    Ok(Prediction::new(outcomes, marginals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(width: usize) -> StateSpace {
        StateSpace::new(3, width).unwrap()
    }

    // Builds an n x n matrix with one column filled in.
    fn matrix_with_column(n: usize, column: usize, values: &[f64]) -> Matrix {
        let mut m = Matrix::new(n, n);
        for (i, &value) in values.iter().enumerate() {
            m.set(i + 1, column, value);
        }
        m
    }

    // 1. ranks_outcomes_descending
    #[test]
    fn ranks_outcomes_descending() {
        let m = matrix_with_column(3, 1, &[0.2, 0.5, 0.3]);
        let prediction = predict(&m, &[Level::Low], &space(1)).unwrap();

        let likelihoods: Vec<f64> = prediction
            .outcomes()
            .iter()
            .map(|o| o.likelihood())
            .collect();
        assert_eq!(likelihoods, vec![0.5, 0.3, 0.2]);
        assert_eq!(prediction.outcomes()[0].index(), 1);
        assert_eq!(prediction.outcomes()[0].levels(), &[Level::Medium]);
    }

    // 2. skips_zero_likelihood_states
    #[test]
    fn skips_zero_likelihood_states() {
        let m = matrix_with_column(3, 3, &[0.0, 1.0, 0.0]);
        let prediction = predict(&m, &[Level::High], &space(1)).unwrap();

        assert_eq!(prediction.outcomes().len(), 1);
        assert_eq!(prediction.outcomes()[0].index(), 1);
        assert_eq!(prediction.outcomes()[0].likelihood(), 1.0);
    }

    // 3. equal_likelihoods_keep_state_order
    #[test]
    fn equal_likelihoods_keep_state_order() {
        let m = matrix_with_column(3, 1, &[0.0, 0.5, 0.5]);
        let prediction = predict(&m, &[Level::Low], &space(1)).unwrap();

        let indices: Vec<usize> = prediction.outcomes().iter().map(|o| o.index()).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    // 4. marginals_accumulate_per_attribute
    #[test]
    fn marginals_accumulate_per_attribute() {
        // Two attributes, nine states. From (Low, Low) the chain moves to
        // (Medium, Low) with 0.6 and to (Low, Medium) with 0.4.
        let mut m = Matrix::new(9, 9);
        m.set(2, 1, 0.6); // state index 1 = (Medium, Low)
        m.set(4, 1, 0.4); // state index 3 = (Low, Medium)
        let prediction = predict(&m, &[Level::Low, Level::Low], &space(2)).unwrap();

        let first = &prediction.marginals()[0];
        assert!((first.mass(Level::Low) - 0.4).abs() < 1e-12);
        assert!((first.mass(Level::Medium) - 0.6).abs() < 1e-12);
        assert_eq!(first.mass(Level::High), 0.0);
        let (level, mass) = first.best_level();
        assert_eq!(level, Level::Medium);
        assert!((mass - 0.6).abs() < 1e-12);

        let second = &prediction.marginals()[1];
        let (level, mass) = second.best_level();
        assert_eq!(level, Level::Low);
        assert!((mass - 0.6).abs() < 1e-12);
    }

    // 5. marginal_ties_prefer_higher_level
    #[test]
    fn marginal_ties_prefer_higher_level() {
        let m = matrix_with_column(3, 1, &[0.0, 0.5, 0.5]);
        let prediction = predict(&m, &[Level::Low], &space(1)).unwrap();

        let (level, mass) = prediction.marginals()[0].best_level();
        assert_eq!(level, Level::High);
        assert_eq!(mass, 0.5);
    }

    // 6. empty_column_yields_no_outcomes
    #[test]
    fn empty_column_yields_no_outcomes() {
        let m = Matrix::new(3, 3);
        let prediction = predict(&m, &[Level::Medium], &space(1)).unwrap();

        assert!(prediction.outcomes().is_empty());
        assert!(prediction.significant(DEFAULT_SIGNIFICANCE).is_empty());
        let (level, mass) = prediction.marginals()[0].best_level();
        assert_eq!(level, Level::Low);
        assert_eq!(mass, 0.0);
    }

    // 7. today_must_match_width
    #[test]
    fn today_must_match_width() {
        let m = Matrix::new(9, 9);
        let result = predict(&m, &[Level::Low], &space(2));
        assert!(matches!(
            result,
            Err(MarkovError::WidthMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    // 8. matrix_must_match_space
    #[test]
    fn matrix_must_match_space() {
        let m = Matrix::new(4, 4);
        let result = predict(&m, &[Level::Low], &space(1));
        assert!(matches!(
            result,
            Err(MarkovError::ShapeMismatch {
                rows: 4,
                columns: 4,
                n_states: 3
            })
        ));
    }

    // 9. rejects_unsupported_arity
    #[test]
    fn rejects_unsupported_arity() {
        let wide = StateSpace::new(4, 1).unwrap();
        let m = Matrix::new(4, 4);
        let result = predict(&m, &[Level::Low], &wide);
        assert!(matches!(
            result,
            Err(MarkovError::UnsupportedArity { arity: 4, max: 3 })
        ));
    }

    // 10. significance_threshold_is_inclusive
    #[test]
    fn significance_threshold_is_inclusive() {
        let m = matrix_with_column(3, 1, &[0.01, 0.99, 0.0]);
        let prediction = predict(&m, &[Level::Low], &space(1)).unwrap();
        assert_eq!(prediction.significant(DEFAULT_SIGNIFICANCE).len(), 2);

        let m = matrix_with_column(3, 1, &[0.0099, 0.9901, 0.0]);
        let prediction = predict(&m, &[Level::Low], &space(1)).unwrap();
        let significant = prediction.significant(DEFAULT_SIGNIFICANCE);
        assert_eq!(significant.len(), 1);
        assert_eq!(significant[0].index(), 1);
    }

    // 11. uniform_column_has_no_significant_outcome
    #[test]
    fn uniform_column_has_no_significant_outcome() {
        // 243 states: a uniform column puts ~0.0041 on each, all below 0.01.
        let wide = space(5);
        let mut m = Matrix::new(wide.n_states(), wide.n_states());
        m.normalize_columns();

        let today = [Level::Low; 5];
        let prediction = predict(&m, &today, &wide).unwrap();
        assert_eq!(prediction.outcomes().len(), 243);
        assert!(prediction.significant(DEFAULT_SIGNIFICANCE).is_empty());

        let total: f64 = prediction.outcomes().iter().map(|o| o.likelihood()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
