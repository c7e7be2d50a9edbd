use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::PageContext;
use crate::error::ChatError;

/// The assistant's reply to one visitor message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: MessageContent,
    /// Set by the backend when the visitor's message indicates crisis;
    /// the widget switches to crisis resources immediately.
    pub is_crisis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContent {
    pub content: String,
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    context: &'a PageContext,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionResponse {
    session_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    message: &'a str,
}

/// Client for the support-chat backend. One request in flight per user
/// action; callers degrade to an apology message on any error.
#[derive(Debug, Clone)]
pub struct SupportChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl SupportChatClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Open a chat session grounded in the page the visitor is on.
    /// Returns the backend's session id.
    pub async fn create_session(&self, context: &PageContext) -> Result<String, ChatError> {
        let url = format!("{}/chat/sessions", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateSessionRequest { context })
            .send()
            .await?;
        let response = check_status(response).await?;

        let body: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::ResponseParse(e.to_string()))?;

        info!(session_id = %body.session_id, "chat session created");

        Ok(body.session_id)
    }

    /// Send one visitor message and return the assistant's reply.
    pub async fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let url = format!("{}/chat/sessions/{session_id}/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { message })
            .send()
            .await?;
        let response = check_status(response).await?;

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::ResponseParse(e.to_string()))?;

        info!(session_id, is_crisis = reply.is_crisis, "chat reply received");

        Ok(reply)
    }
}

/// Map a non-success status to a typed error, keeping whatever body the
/// backend sent as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ChatError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ChatError::Api {
        status: status.as_u16(),
        message,
    })
}
