//! Conversation state for the challenge driver.

pub mod entities;

pub use entities::{
    ConversationId, ConversationState, ConversationStatus, DEFAULT_MAX_TURNS, DriverPhase,
    TERMINATION_PROMPT, UserId, is_termination,
};
