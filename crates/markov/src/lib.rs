//! First-order Markov chain over joint discretized weather states.
//!
//! This crate models day-to-day weather evolution as a first-order Markov
//! chain. Each day is reduced to a tuple of ordinal levels (one per
//! attribute), the tuple is encoded into a single joint state index, and
//! the chain over those indices is estimated from the historical sequence
//! and projected one step ahead.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  threshold    │────▶│  transition    │────▶│     predict      │
//!  │  (classify)   │     │  (estimate P)  │     │  (rank outcomes) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use aeolus_markov::{CutoffTable, Cutoffs, Level, StateSpace};
//!
//! // Cutoffs for two attributes, e.g. temperature and rainfall.
//! let table = CutoffTable::new(vec![
//!     Cutoffs { lower: 5.0, upper: 25.0 },
//!     Cutoffs { lower: 0.02, upper: 0.3 },
//! ])
//! .unwrap();
//!
//! let day = table.classify_day(&[17.0, 0.01]).unwrap();
//! assert_eq!(day, vec![Level::Medium, Level::Low]);
//!
//! // Three levels per attribute, two attributes: nine joint states.
//! let space = StateSpace::new(3, table.width()).unwrap();
//! assert_eq!(space.n_states(), 9);
//! assert_eq!(space.encode_levels(&day).unwrap(), 1);
//! ```

pub mod error;
pub mod predict;
pub mod state;
pub mod threshold;
pub mod transition;

pub use error::MarkovError;
pub use predict::{AttributeMarginal, DEFAULT_SIGNIFICANCE, Outcome, Prediction, predict};
pub use state::{Level, StateSpace};
pub use threshold::{CutoffTable, Cutoffs};
pub use transition::{count_transitions, estimate_transitions};
