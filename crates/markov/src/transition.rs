//! Transition matrix estimation for the joint state chain.

use aeolus_matrix::{Matrix, STOCHASTIC_TOLERANCE};
use tracing::{debug, warn};

use crate::error::MarkovError;
use crate::state::{Level, StateSpace};

/// Counts day-to-day transitions in a discretized sequence.
///
/// Each consecutive pair of days `(previous, next)` adds one count at
/// `(row = next + 1, column = previous + 1)`, so a column collects the
/// outgoing transitions of one previous-state. The counts are returned
/// unnormalized; a sequence of `M` days yields `M - 1` counts in total.
///
/// # Errors
///
/// Returns [`MarkovError::WidthMismatch`] or
/// [`MarkovError::LevelOutOfRange`] when a day does not fit the state space.
pub fn count_transitions(days: &[Vec<Level>], space: &StateSpace) -> Result<Matrix, MarkovError> {
    let n = space.n_states();
    let mut counts = Matrix::new(n, n);

    // Encode everything first so a malformed day fails before any counting.
    let mut indices = Vec::with_capacity(days.len());
    for day in days {
        indices.push(space.encode_levels(day)?);
    }

    for pair in indices.windows(2) {
        let (column, row) = (pair[0] + 1, pair[1] + 1);
        let count = counts.get(row, column);
        counts.set(row, column, count + 1.0);
    }

    Ok(counts)
}

/// Estimates the column-stochastic transition matrix for a sequence.
///
/// Counts transitions with [`count_transitions`], then rescales every column
/// into a probability distribution. After normalization, entry
/// `(s + 1, p + 1)` holds the probability of moving to state `s` given that
/// today is state `p`. Columns of previous-states that never occur in the
/// history fall back to the uniform distribution over all next states; a
/// sequence with fewer than two days therefore produces a fully uniform
/// matrix.
///
/// # Errors
///
/// Returns encoding errors from [`count_transitions`], and
/// [`MarkovError::NotStochastic`] if a normalized column fails the
/// stochasticity check (tolerance [`STOCHASTIC_TOLERANCE`]).
pub fn estimate_transitions(
    days: &[Vec<Level>],
    space: &StateSpace,
) -> Result<Matrix, MarkovError> {
    if days.len() < 2 {
        warn!(
            n_days = days.len(),
            "fewer than two observed days, every column falls back to the uniform prior"
        );
    }

    let mut matrix = count_transitions(days, space)?;
    debug!(
        n_days = days.len(),
        n_states = space.n_states(),
        "accumulated transition counts"
    );

    matrix.normalize_columns();

    for column in 1..=matrix.columns() {
        let sum = matrix.column_sum(column);
        if (sum - 1.0).abs() > STOCHASTIC_TOLERANCE {
            return Err(MarkovError::NotStochastic { column, sum });
        }
    }

    Ok(matrix)
}
