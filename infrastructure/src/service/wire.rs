//! JSON bodies exchanged with the challenge service.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConversationRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationResponse {
    #[serde(deserialize_with = "id_string")]
    pub conversation_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BehaviourResponse {
    pub messages: Vec<BehaviourMessage>,
}

/// One conversation message; only `text` is used
#[derive(Debug, Deserialize)]
pub(crate) struct BehaviourMessage {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerResponse {
    pub correct: bool,
}

/// Accept identifiers sent either as JSON strings or numbers
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
