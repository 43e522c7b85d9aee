//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording every step of a
//! conversation (prompts received, answers submitted, outcome) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the full exchange
//! with the challenge service.

use challenge_domain::QuestionKind;
use serde::Serialize;

/// One recorded conversation step
///
/// Serializes with a `type` tag, e.g.
/// `{"type":"answer_submitted","turn":3,"kind":"sum","answer":"6","correct":true}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    Registered {
        user_id: String,
    },
    ConversationStarted {
        conversation_id: String,
    },
    PromptReceived {
        turn: usize,
        text: String,
    },
    AnswerSubmitted {
        turn: usize,
        kind: QuestionKind,
        answer: String,
        correct: bool,
    },
    Finished {
        turns: usize,
    },
    Failed {
        error: String,
        /// Answered turns, absent when the conversation never started
        #[serde(skip_serializing_if = "Option::is_none")]
        turns: Option<usize>,
    },
}

impl TranscriptEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TranscriptEvent::Registered { .. } => "registered",
            TranscriptEvent::ConversationStarted { .. } => "conversation_started",
            TranscriptEvent::PromptReceived { .. } => "prompt_received",
            TranscriptEvent::AnswerSubmitted { .. } => "answer_submitted",
            TranscriptEvent::Finished { .. } => "finished",
            TranscriptEvent::Failed { .. } => "failed",
        }
    }
}

/// Port for logging conversation steps.
///
/// `log` is synchronous and non-fallible so a logging failure never
/// disrupts the conversation.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when no transcript is configured.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
