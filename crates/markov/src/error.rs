//! Error types for the aeolus-markov crate.

/// Error type for all fallible operations in the aeolus-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a state space cannot be constructed.
    #[error("invalid state space: {reason}")]
    InvalidStateSpace {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a level tuple or buffer has the wrong width.
    #[error("width mismatch: expected {expected} levels, got {got}")]
    WidthMismatch {
        /// Width required by the state space.
        expected: usize,
        /// Width actually provided.
        got: usize,
    },

    /// Returned when a level digit is too large for the state space.
    #[error("level {level} for attribute {attribute} is outside 0..{arity}")]
    LevelOutOfRange {
        /// 0-based attribute position.
        attribute: usize,
        /// The offending level digit.
        level: usize,
        /// Number of levels per attribute.
        arity: usize,
    },

    /// Returned when a joint state index is too large for the state space.
    #[error("state index {index} is outside 0..{n_states}")]
    StateOutOfRange {
        /// The offending state index.
        index: usize,
        /// Number of joint states.
        n_states: usize,
    },

    /// Returned when a flat series does not divide into whole days.
    #[error("series length {len} is not a multiple of the attribute width {width}")]
    LengthMismatch {
        /// Length of the flat value slice.
        len: usize,
        /// Number of attributes per day.
        width: usize,
    },

    /// Returned when a cutoff table has no attributes.
    #[error("cutoff table is empty")]
    EmptyCutoffs,

    /// Returned when an attribute's cutoffs are non-finite or inverted.
    #[error(
        "invalid cutoffs for attribute {attribute}: lower {lower}, upper {upper} (must be finite with lower <= upper)"
    )]
    InvalidCutoff {
        /// 0-based attribute position.
        attribute: usize,
        /// The lower cutoff.
        lower: f64,
        /// The upper cutoff.
        upper: f64,
    },

    /// Returned when a state space has more levels than [`crate::Level`] can name.
    #[error("arity {arity} exceeds the {max} named levels")]
    UnsupportedArity {
        /// Levels per attribute in the state space.
        arity: usize,
        /// Maximum supported arity.
        max: usize,
    },

    /// Returned when a transition matrix does not match the state space.
    #[error("matrix is {rows}x{columns}, expected {n_states}x{n_states}")]
    ShapeMismatch {
        /// Rows of the offending matrix.
        rows: usize,
        /// Columns of the offending matrix.
        columns: usize,
        /// Joint state count the matrix should match.
        n_states: usize,
    },

    /// Returned when an estimated matrix fails the stochasticity check.
    #[error("column {column} of the transition matrix sums to {sum}, expected ~1.0")]
    NotStochastic {
        /// 1-based column that failed.
        column: usize,
        /// The column's actual sum.
        sum: f64,
    },

    /// Returned when an underlying matrix operation fails.
    #[error("matrix operation failed: {reason}")]
    Matrix {
        /// Description of the problem.
        reason: String,
    },
}

impl From<aeolus_matrix::MatrixError> for MarkovError {
    fn from(err: aeolus_matrix::MatrixError) -> Self {
        Self::Matrix {
            reason: err.to_string(),
        }
    }
}
