//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [service]
//! base_url = "https://us-central1-rival-chatbot-challenge.cloudfunctions.net"
//! timeout_seconds = 30
//!
//! [participant]
//! name = "John Doe"
//! email = "jane@doe.com"
//!
//! [challenge]
//! max_turns = 100
//! dataset_path = "sports-teams.dat"
//! transcript_path = "logs/challenge.jsonl"
//! ```

use crate::dataset::DEFAULT_DATASET_PATH;
use crate::service::DEFAULT_BASE_URL;
use challenge_application::{ChallengeParams, Participant};
use challenge_domain::DEFAULT_MAX_TURNS;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("service.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("service.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("challenge.max_turns cannot be 0")]
    InvalidMaxTurns,
}

/// Raw service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the challenge service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Raw participant configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantConfig {
    pub name: String,
    pub email: String,
}

impl Default for FileParticipantConfig {
    fn default() -> Self {
        let participant = Participant::default();
        Self {
            name: participant.name,
            email: participant.email,
        }
    }
}

/// Raw challenge configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChallengeConfig {
    /// Turn bound for one conversation
    pub max_turns: usize,
    /// Path to the team dataset file
    pub dataset_path: String,
    /// Optional JSONL transcript file
    pub transcript_path: Option<String>,
}

impl Default for FileChallengeConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            transcript_path: None,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub service: FileServiceConfig,
    pub participant: FileParticipantConfig,
    pub challenge: FileChallengeConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.service.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.challenge.max_turns == 0 {
            return Err(ConfigValidationError::InvalidMaxTurns);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_seconds)
    }

    /// Driver parameters derived from this configuration
    pub fn challenge_params(&self) -> ChallengeParams {
        ChallengeParams::default()
            .with_participant(Participant::new(
                self.participant.name.clone(),
                self.participant.email.clone(),
            ))
            .with_max_turns(self.challenge.max_turns)
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.service.timeout_seconds, 30);
        assert_eq!(config.participant.name, "John Doe");
        assert_eq!(config.challenge.max_turns, 100);
        assert_eq!(config.challenge.dataset_path, "sports-teams.dat");
        assert!(config.challenge.transcript_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [challenge]
            max_turns = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.challenge.max_turns, 12);
        assert_eq!(config.challenge.dataset_path, "sports-teams.dat");
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = FileConfig::default();
        config.service.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));

        let mut config = FileConfig::default();
        config.service.base_url = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBaseUrl)
        ));

        let mut config = FileConfig::default();
        config.challenge.max_turns = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxTurns)
        ));
    }

    #[test]
    fn test_challenge_params() {
        let mut config = FileConfig::default();
        config.participant.name = "Ada".to_string();
        config.challenge.max_turns = 7;

        let params = config.challenge_params();
        assert_eq!(params.participant.name, "Ada");
        assert_eq!(params.participant.email, "jane@doe.com");
        assert_eq!(params.max_turns, 7);
    }

    #[test]
    fn test_to_toml_round_trips() {
        let rendered = FileConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[service]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.challenge.max_turns, 100);
    }
}
