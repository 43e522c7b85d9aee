//! Team dataset adapters.

mod file_provider;

pub use file_provider::{DEFAULT_DATASET_PATH, FileTeamDatasetProvider};
