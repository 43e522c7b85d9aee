//! Challenge Service port
//!
//! Defines the interface for talking to the remote challenge service.

use crate::config::Participant;
use async_trait::async_trait;
use challenge_domain::{ConversationId, UserId};
use thiserror::Error;

/// Errors that can occur while calling the challenge service
///
/// Every variant is a transport-level failure; none is retried.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Conversation {0} has no messages")]
    EmptyConversation(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the challenge service
///
/// Each call is awaited to completion before the driver proceeds; these
/// four calls are the only suspension points of a conversation.
#[async_trait]
pub trait ChallengeService: Send + Sync {
    /// Register a participant and obtain a user identity
    async fn register(&self, participant: &Participant) -> Result<UserId, ServiceError>;

    /// Open a new conversation for the user
    async fn start_conversation(&self, user_id: &UserId) -> Result<ConversationId, ServiceError>;

    /// Text of the latest message in the conversation
    async fn fetch_prompt(&self, conversation_id: &ConversationId) -> Result<String, ServiceError>;

    /// Submit an answer; returns whether the service graded it correct
    async fn submit_answer(
        &self,
        conversation_id: &ConversationId,
        content: &str,
    ) -> Result<bool, ServiceError>;
}
