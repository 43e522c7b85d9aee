//! Application-level configuration.
//!
//! - [`ChallengeParams`]: driver loop control (participant, turn bound)

pub mod challenge_params;

pub use challenge_params::{ChallengeParams, Participant};
