//! Error types for aeolus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the aeolus-io crate.
///
/// This enum covers missing files, I/O failures, per-line parse errors with
/// their location in the source file, and validation problems found when
/// assembling the in-memory series.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error raised while reading a file.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a data line cannot be parsed.
    ///
    /// `line` is 1-based and counts every line of the file, headers included,
    /// so it matches what an editor shows.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// Path to the file that was being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_read() {
        let err = IoError::Read {
            path: PathBuf::from("/tmp/data.csv"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read /tmp/data.csv: permission denied"
        );
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            path: PathBuf::from("data.csv"),
            line: 7,
            reason: "invalid number \"abc\" in data column 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data.csv:7: invalid number \"abc\" in data column 2"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "columns must be at least 1; series is ragged".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): columns must be at least 1; series is ragged"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
