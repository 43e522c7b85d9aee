//! Application layer for rival-challenge
//!
//! This crate contains the conversation driver use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ChallengeParams, Participant};
pub use ports::{
    challenge_service::{ChallengeService, ServiceError},
    dataset_provider::{DatasetError, TeamDatasetProvider},
    progress::{NoProgress, TurnProgressNotifier},
    transcript::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::run_challenge::{ChallengeOutcome, RunChallengeError, RunChallengeUseCase};
