//! Progress notification port
//!
//! Defines the interface for reporting progress while a conversation runs.

use challenge_domain::{ConversationId, DriverPhase, QuestionKind, UserId};

/// Callback for progress updates during a challenge run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, nothing).
pub trait TurnProgressNotifier: Send + Sync {
    /// Called whenever the driver enters a new phase
    fn on_phase(&self, _phase: DriverPhase) {}

    /// Called after registration succeeds
    fn on_registered(&self, _user_id: &UserId) {}

    /// Called once the conversation is open
    fn on_conversation_started(&self, conversation_id: &ConversationId);

    /// Called with each prompt before it is classified
    fn on_prompt(&self, _turn: usize, _prompt: &str) {}

    /// Called after the service graded an answer
    fn on_turn_answered(&self, turn: usize, kind: QuestionKind, correct: bool);

    /// Called when the termination prompt arrives
    fn on_finished(&self, turns: usize);

    /// Called when the run ends in the failed state
    fn on_failed(&self, reason: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {
    fn on_conversation_started(&self, _conversation_id: &ConversationId) {}
    fn on_turn_answered(&self, _turn: usize, _kind: QuestionKind, _correct: bool) {}
    fn on_finished(&self, _turns: usize) {}
    fn on_failed(&self, _reason: &str) {}
}
