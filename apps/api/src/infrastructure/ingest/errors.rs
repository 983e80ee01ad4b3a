use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading locode sources at startup. All of them are fatal.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in {} at row {row}: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("failed to load locodes from {}", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: Box<IngestError>,
    },
}

impl IngestError {
    /// The error that caused a `LoadFailed`, or `self` for any other variant.
    pub fn root(&self) -> &IngestError {
        match self {
            Self::LoadFailed { source, .. } => source.root(),
            other => other,
        }
    }
}
