//! Dense matrix support for transition-model estimation.
//!
//! The central type is [`Matrix`], a dense row-major `f64` matrix addressed
//! with **1-based** row and column indices. On top of the usual accessors it
//! carries the operations the transition pipeline needs: multiplication,
//! column normalization (with a uniform fallback for empty columns) and a
//! column-stochasticity check.

pub mod dense;
pub mod error;

pub use dense::{Matrix, STOCHASTIC_TOLERANCE};
pub use error::MatrixError;
