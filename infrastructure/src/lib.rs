//! Infrastructure layer for rival-challenge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod service;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use dataset::{DEFAULT_DATASET_PATH, FileTeamDatasetProvider};
pub use logging::JsonlTranscriptLogger;
pub use service::{DEFAULT_BASE_URL, HttpChallengeService};
