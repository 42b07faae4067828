//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use aeolus_io::ReaderConfig;
use aeolus_markov::{CutoffTable, Cutoffs};

use crate::config::{AttributeToml, DataToml};

/// Builds a [`ReaderConfig`] from the TOML data configuration.
///
/// The column count comes from the attribute list, so the reader and the
/// discretizer always agree on the day width.
pub fn build_reader_config(data: &DataToml, n_attributes: usize) -> ReaderConfig {
    ReaderConfig::default()
        .with_header_rows(data.header_rows)
        .with_leading_fields(data.leading_fields)
        .with_columns(n_attributes)
        .with_delimiter(data.delimiter)
}

/// Builds a [`CutoffTable`] from the TOML attribute list.
pub fn build_cutoff_table(attributes: &[AttributeToml]) -> Result<CutoffTable> {
    let cutoffs: Vec<Cutoffs> = attributes
        .iter()
        .map(|a| Cutoffs {
            lower: a.lower,
            upper: a.upper,
        })
        .collect();
    CutoffTable::new(cutoffs).context("invalid attribute cutoffs")
}

/// Attribute names in data column order, for prompts and reports.
pub fn attribute_names(attributes: &[AttributeToml]) -> Vec<String> {
    attributes.iter().map(|a| a.name.clone()).collect()
}
