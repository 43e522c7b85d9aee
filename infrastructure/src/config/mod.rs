//! Configuration file loading for rival-challenge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RIVAL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./rival-challenge.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rival-challenge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChallengeConfig, FileConfig, FileParticipantConfig,
    FileServiceConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
