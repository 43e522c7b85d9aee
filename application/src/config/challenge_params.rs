//! Challenge parameters: driver loop control.
//!
//! [`ChallengeParams`] groups the static parameters of a
//! [`RunChallengeUseCase`](crate::use_cases::run_challenge::RunChallengeUseCase)
//! run: who registers, and how many turns a conversation may take.

use challenge_domain::DEFAULT_MAX_TURNS;
use serde::{Deserialize, Serialize};

/// Identity sent to the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self::new("John Doe", "jane@doe.com")
    }
}

/// Driver loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeParams {
    /// Identity used at registration.
    pub participant: Participant,
    /// Maximum answered turns before the run fails with a timeout.
    pub max_turns: usize,
}

impl Default for ChallengeParams {
    fn default() -> Self {
        Self {
            participant: Participant::default(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl ChallengeParams {
    // ==================== Builder Methods ====================

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participant = participant;
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ChallengeParams::default();
        assert_eq!(params.max_turns, 100);
        assert_eq!(params.participant.name, "John Doe");
        assert_eq!(params.participant.email, "jane@doe.com");
    }

    #[test]
    fn test_builder() {
        let params = ChallengeParams::default()
            .with_max_turns(5)
            .with_participant(Participant::new("Ada", "ada@example.com"));

        assert_eq!(params.max_turns, 5);
        assert_eq!(params.participant.name, "Ada");
    }
}
