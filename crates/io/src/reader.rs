//! Delimited-text reader configuration and orchestration.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::observed::ObservedSeries;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading observed weather data from a delimited file.
///
/// Use the builder methods (`with_*`) to customise the header size, the
/// number of non-numeric leading fields, the data column count, and the
/// field delimiter. The [`Default`] implementation matches the historical
/// weather-station export format: four header lines, one leading date field,
/// five comma-separated data columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Number of lines to skip at the top of the file.
    header_rows: usize,
    /// Number of non-numeric fields at the start of each data line.
    leading_fields: usize,
    /// Number of numeric data columns per line.
    columns: usize,
    /// Field delimiter.
    delimiter: char,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            header_rows: 4,
            leading_fields: 1,
            columns: 5,
            delimiter: ',',
        }
    }
}

impl ReaderConfig {
    /// Set the number of header lines to skip.
    pub fn with_header_rows(mut self, rows: usize) -> Self {
        self.header_rows = rows;
        self
    }

    /// Set the number of leading non-numeric fields per data line.
    pub fn with_leading_fields(mut self, fields: usize) -> Self {
        self.leading_fields = fields;
        self
    }

    /// Set the number of numeric data columns per line.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the configured data column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `columns` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.columns == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "columns must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_observed
// ---------------------------------------------------------------------------

/// Read an observed weather series from a delimited text file.
///
/// After the configured header lines, every non-blank line must carry the
/// configured leading fields followed by the configured number of numeric
/// columns; extra trailing fields are ignored. Blank lines and `\r\n` line
/// endings are tolerated. Each accepted line becomes one day of the returned
/// series.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Read`] when the file
/// cannot be read, and [`IoError::Parse`] with the 1-based line number when
/// a data line is short, non-numeric, or non-finite.
pub fn read_observed(path: &Path, config: &ReaderConfig) -> Result<ObservedSeries, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut values = Vec::new();
    let mut n_days = 0usize;
    let mut n_blank = 0usize;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if line <= config.header_rows {
            continue;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            n_blank += 1;
            continue;
        }

        let mut fields = trimmed.split(config.delimiter);
        for found in 0..config.leading_fields {
            if fields.next().is_none() {
                return Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: format!(
                        "expected {} leading field(s), found {found}",
                        config.leading_fields
                    ),
                });
            }
        }

        for column in 0..config.columns {
            let field = fields.next().ok_or_else(|| IoError::Parse {
                path: path.to_path_buf(),
                line,
                reason: format!("expected {} data column(s), found {column}", config.columns),
            })?;
            let field = field.trim();
            let value: f64 = field.parse().map_err(|_| IoError::Parse {
                path: path.to_path_buf(),
                line,
                reason: format!("invalid number {field:?} in data column {}", column + 1),
            })?;
            if !value.is_finite() {
                return Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: format!("non-finite value in data column {}", column + 1),
                });
            }
            values.push(value);
        }

        n_days += 1;
    }

    if n_blank > 0 {
        debug!(n_blank, "skipped blank lines");
    }
    info!(
        path = %path.display(),
        n_days,
        n_attributes = config.columns,
        "read observed series"
    );

    ObservedSeries::new(values, config.columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_station_export_format() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.header_rows, 4);
        assert_eq!(cfg.leading_fields, 1);
        assert_eq!(cfg.columns(), 5);
        assert_eq!(cfg.delimiter, ',');
    }

    #[test]
    fn builder_methods_set_fields() {
        let cfg = ReaderConfig::default()
            .with_header_rows(1)
            .with_leading_fields(0)
            .with_columns(3)
            .with_delimiter(';');

        assert_eq!(cfg.header_rows, 1);
        assert_eq!(cfg.leading_fields, 0);
        assert_eq!(cfg.columns(), 3);
        assert_eq!(cfg.delimiter, ';');
    }

    #[test]
    fn validate_accepts_default() {
        assert!(ReaderConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_columns() {
        let cfg = ReaderConfig::default().with_columns(0);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }
}
