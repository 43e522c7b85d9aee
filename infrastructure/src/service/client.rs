//! HTTP adapter for the challenge service
//!
//! | Call | Endpoint |
//! |------|----------|
//! | register | `POST /challenge-register {name, email} -> {user_id}` |
//! | start_conversation | `POST /challenge-conversation {user_id} -> {conversation_id}` |
//! | fetch_prompt | `GET /challenge-behaviour/{id} -> {messages: [{text}, ...]}` |
//! | submit_answer | `POST /challenge-behaviour/{id} {content} -> {correct}` |

use super::wire::{
    AnswerRequest, AnswerResponse, BehaviourResponse, ConversationRequest, ConversationResponse,
    RegisterRequest, RegisterResponse,
};
use async_trait::async_trait;
use challenge_application::{ChallengeService, Participant, ServiceError};
use challenge_domain::{ConversationId, UserId};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT_VALUE: &str = concat!("rival-challenge/", env!("CARGO_PKG_VERSION"));

/// Default service location
pub const DEFAULT_BASE_URL: &str = "https://us-central1-rival-chatbot-challenge.cloudfunctions.net";

/// [`ChallengeService`] implementation over HTTP + JSON
#[derive(Debug, Clone)]
pub struct HttpChallengeService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChallengeService {
    /// Build a client with a per-request timeout
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, ServiceError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ServiceError::Request(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;
        decode(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ServiceError> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        decode(response).await
    }
}

fn map_send_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Request(e.to_string())
    }
}

/// Reject non-2xx statuses, then parse the JSON body
async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await.map_err(map_send_error)?;
    serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait]
impl ChallengeService for HttpChallengeService {
    async fn register(&self, participant: &Participant) -> Result<UserId, ServiceError> {
        let response: RegisterResponse = self
            .post_json(
                "challenge-register",
                &RegisterRequest {
                    name: &participant.name,
                    email: &participant.email,
                },
            )
            .await?;
        Ok(UserId::new(response.user_id))
    }

    async fn start_conversation(&self, user_id: &UserId) -> Result<ConversationId, ServiceError> {
        let response: ConversationResponse = self
            .post_json(
                "challenge-conversation",
                &ConversationRequest {
                    user_id: user_id.as_str(),
                },
            )
            .await?;
        Ok(ConversationId::new(response.conversation_id))
    }

    async fn fetch_prompt(&self, conversation_id: &ConversationId) -> Result<String, ServiceError> {
        let response: BehaviourResponse = self
            .get_json(&format!("challenge-behaviour/{}", conversation_id))
            .await?;
        response
            .messages
            .into_iter()
            .last()
            .map(|message| message.text)
            .ok_or_else(|| ServiceError::EmptyConversation(conversation_id.to_string()))
    }

    async fn submit_answer(
        &self,
        conversation_id: &ConversationId,
        content: &str,
    ) -> Result<bool, ServiceError> {
        let response: AnswerResponse = self
            .post_json(
                &format!("challenge-behaviour/{}", conversation_id),
                &AnswerRequest { content },
            )
            .await?;
        Ok(response.correct)
    }
}
