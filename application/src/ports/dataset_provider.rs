//! Team dataset provider port

use challenge_domain::{DomainError, TeamDataset};
use thiserror::Error;

/// Errors that can occur while loading the team dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset: {0}")]
    Format(#[from] DomainError),
}

/// Source of the team reference table
///
/// Called once at startup, before any conversation begins. A format error
/// is fatal.
pub trait TeamDatasetProvider: Send + Sync {
    fn load(&self) -> Result<TeamDataset, DatasetError>;
}
