//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Prompt text that ends the challenge; never classified or answered
pub const TERMINATION_PROMPT: &str = "Thank you for taking the Rival Chatbot Challenge";

/// Default upper bound on answered turns per conversation
pub const DEFAULT_MAX_TURNS: usize = 100;

/// True if `text` is exactly the termination sentence
pub fn is_termination(text: &str) -> bool {
    text == TERMINATION_PROMPT
}

/// User identity issued by the challenge service at registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversation identifier issued by the challenge service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Steps of the conversation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverPhase {
    Registering,
    Starting,
    AwaitingPrompt,
    Classifying,
    Submitting,
    Finished,
    Failed,
}

impl DriverPhase {
    pub fn as_str(&self) -> &str {
        match self {
            DriverPhase::Registering => "registering",
            DriverPhase::Starting => "starting",
            DriverPhase::AwaitingPrompt => "awaiting_prompt",
            DriverPhase::Classifying => "classifying",
            DriverPhase::Submitting => "submitting",
            DriverPhase::Finished => "finished",
            DriverPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DriverPhase::Finished | DriverPhase::Failed)
    }
}

impl std::fmt::Display for DriverPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Finished,
    Failed,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConversationStatus::Active => "active",
            ConversationStatus::Finished => "finished",
            ConversationStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of one challenge conversation (Entity)
///
/// Owned by the driver. `turn_count` counts answered-and-accepted turns.
/// Once `Finished` or `Failed`, the state no longer changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    conversation_id: ConversationId,
    turn_count: usize,
    status: ConversationStatus,
}

impl ConversationState {
    pub fn new(conversation_id: ConversationId) -> Self {
        Self {
            conversation_id,
            turn_count: 0,
            status: ConversationStatus::Active,
        }
    }

    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ConversationStatus::Active
    }

    /// Record an accepted answer. No-op once the conversation has ended.
    pub fn record_turn(&mut self) {
        if self.is_active() {
            self.turn_count += 1;
        }
    }

    pub fn finish(&mut self) {
        if self.is_active() {
            self.status = ConversationStatus::Finished;
        }
    }

    pub fn fail(&mut self) {
        if self.is_active() {
            self.status = ConversationStatus::Failed;
        }
    }
}
