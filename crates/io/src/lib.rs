//! # aeolus-io
//!
//! Read observed daily weather tables from delimited text files. Bridges
//! on-disk datasets into aeolus's internal `&[f64]` slice-based APIs.

mod error;
mod observed;
mod reader;
mod validate;

pub use error::IoError;
pub use observed::ObservedSeries;
pub use reader::{ReaderConfig, read_observed};
