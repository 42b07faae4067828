use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

/// Config file name looked for in the working directory when `-c` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "aeolus.toml";

/// Top-level Aeolus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Observation file settings.
    #[serde(default)]
    pub data: DataToml,

    /// Per-attribute discretization cutoffs, in data column order.
    #[serde(default = "default_attributes", rename = "attribute")]
    pub attributes: Vec<AttributeToml>,

    /// Prediction settings.
    #[serde(default)]
    pub predict: PredictToml,
}

impl Default for AeolusConfig {
    fn default() -> Self {
        Self {
            data: DataToml::default(),
            attributes: default_attributes(),
            predict: PredictToml::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Path to the observation file.
    pub path: Option<PathBuf>,
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    #[serde(default = "default_leading_fields")]
    pub leading_fields: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            path: None,
            header_rows: default_header_rows(),
            leading_fields: default_leading_fields(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_header_rows() -> usize {
    4
}
fn default_leading_fields() -> usize {
    1
}
fn default_delimiter() -> char {
    ','
}

/// One observed attribute and its two discretization cutoffs.
///
/// Values above `upper` classify as high, values above `lower` as medium,
/// everything else as low.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeToml {
    /// Attribute name used in prompts and reports.
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

/// The historical weather-station schema: temperature (deg C), relative
/// humidity (%), cloud cover (%), wind speed (m/s) and rainfall (in).
fn default_attributes() -> Vec<AttributeToml> {
    [
        ("temperature", 5.0, 25.0),
        ("humidity", 25.0, 65.0),
        ("cloud cover", 40.0, 70.0),
        ("wind speed", 8.0, 15.0),
        ("rain", 0.02, 0.3),
    ]
    .into_iter()
    .map(|(name, lower, upper)| AttributeToml {
        name: name.to_string(),
        lower,
        upper,
    })
    .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictToml {
    /// Likelihood at or above which an outcome counts as significant.
    #[serde(default = "default_significance")]
    pub significance: f64,
    /// How many ranked outcomes to show in the terminal report.
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for PredictToml {
    fn default() -> Self {
        Self {
            significance: default_significance(),
            top: default_top(),
        }
    }
}

fn default_significance() -> f64 {
    aeolus_markov::DEFAULT_SIGNIFICANCE
}
fn default_top() -> usize {
    10
}

/// Loads the TOML configuration from `path`.
///
/// A missing file at the default location falls back to built-in defaults;
/// an explicitly given path must exist.
pub fn load_or_default(path: &Path) -> Result<AeolusConfig> {
    if !path.exists() {
        if path == Path::new(DEFAULT_CONFIG_PATH) {
            info!("no {DEFAULT_CONFIG_PATH} in the working directory, using built-in defaults");
            return Ok(AeolusConfig::default());
        }
        bail!("config file not found: {}", path.display());
    }

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
