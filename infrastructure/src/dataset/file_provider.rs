//! File-backed team dataset provider
//!
//! Reads the whole dataset file once and hands it to
//! [`TeamDataset::parse`] for the line format.

use challenge_application::{DatasetError, TeamDatasetProvider};
use challenge_domain::TeamDataset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "sports-teams.dat";

/// Loads the team dataset from a local file.
#[derive(Debug, Clone)]
pub struct FileTeamDatasetProvider {
    path: PathBuf,
}

impl FileTeamDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileTeamDatasetProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl TeamDatasetProvider for FileTeamDatasetProvider {
    fn load(&self) -> Result<TeamDataset, DatasetError> {
        debug!("Reading team dataset from {}", self.path.display());

        let text = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let dataset = TeamDataset::parse(&text)?;

        info!(
            "Loaded {} team records from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}
