//! Domain layer for rival-challenge
//!
//! This crate contains the core logic of the challenge bot: recognizing
//! question shapes, computing answers, and the conversation state.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Shape**: a recognized question pattern (see [`question::classifier`])
//! - **TeamDataset**: the immutable reference table used by team questions
//! - **ConversationState**: turn count and one-way status of a conversation

pub mod conversation;
pub mod core;
pub mod question;
pub mod team;

// Re-export commonly used types
pub use conversation::{
    ConversationId, ConversationState, ConversationStatus, DEFAULT_MAX_TURNS, DriverPhase,
    TERMINATION_PROMPT, UserId, is_termination,
};
pub use self::core::error::DomainError;
pub use question::{
    ACKNOWLEDGMENT_ANSWER, ACKNOWLEDGMENT_PROMPTS, AnswerEngine, ParsedQuestion,
    PromptClassifier, QuestionKind, compute_answer,
};
pub use team::{TeamDataset, TeamRecord};
