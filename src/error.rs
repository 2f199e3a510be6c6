use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading, merging or writing reports.
///
/// There is no recovery path: any of these aborts the whole merge and no
/// output file is written.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Reading the input directory, reading a report, or writing the output failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file is not valid Cucumber JSON (or lacks `elements`/`steps`)
    #[error("malformed report '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the aggregate for JSON output failed
    #[error("failed to serialize merged report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        MergeError::Parse {
            path: path.into(),
            source,
        }
    }
}
