//! Error types for nimbus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the nimbus-io crate.
///
/// Covers missing files, filesystem failures, malformed JSON, and content
/// that parses but is rejected by the domain crate it feeds.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem error while reading or writing `path`.
    #[error("i/o error on {}: {reason}", path.display())]
    Fs {
        /// File being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a file is not valid JSON for the expected shape.
    #[error("malformed {kind} file {}: {reason}", path.display())]
    Json {
        /// What the file was expected to hold.
        kind: &'static str,
        /// File being parsed.
        path: PathBuf,
        /// Description of the parse failure, with line and column.
        reason: String,
    },

    /// Returned when parsed content is rejected by the domain layer.
    #[error("invalid {kind} file {}: {reason}", path.display())]
    Invalid {
        /// What the file was expected to hold.
        kind: &'static str,
        /// Offending file.
        path: PathBuf,
        /// Why the content was rejected.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn invalid(
        kind: &'static str,
        path: &std::path::Path,
        e: impl std::fmt::Display,
    ) -> Self {
        IoError::Invalid {
            kind,
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.json");
    }

    #[test]
    fn display_json() {
        let err = IoError::Json {
            kind: "dataset",
            path: PathBuf::from("data.json"),
            reason: "expected `,` at line 3 column 5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed dataset file data.json: expected `,` at line 3 column 5"
        );
    }

    #[test]
    fn display_invalid() {
        let err = IoError::invalid(
            "bias table",
            std::path::Path::new("bias.json"),
            "duplicate entry",
        );
        assert_eq!(
            err.to_string(),
            "invalid bias table file bias.json: duplicate entry"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
