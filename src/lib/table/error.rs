use std::{io, path};

use thiserror::Error;

/// Everything that can stop a node table from loading.
///
/// `NotFound` is the only I/O failure surfaced before parsing begins.
/// The remaining variants are all parse failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open node table {}: {source}", path.display())]
    NotFound {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Node table header is missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("Node table row {row}, column `{column}`: {reason}")]
    Parse {
        row: u64,
        column: String,
        reason: String,
    },
}

impl LoadError {
    pub fn is_parse(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

/// Result type for table loading
pub type LoadResult<T> = Result<T, LoadError>;
