//! Typed HTTP client for the chatbot API.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::db::models::{ChatBot, NewChatBot};
use crate::web::models::ErrorResponse;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/chatbots";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Transport(e) => e.status(),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Decode(_) => None,
        }
    }
}

/// The operations the UI layer needs from the backend.
#[async_trait]
pub trait ChatBotGateway: Send + Sync {
    async fn add_chat_bot(&self, chatbot: &NewChatBot) -> Result<ChatBot, ClientError>;
    async fn get_chat_bots(&self) -> Result<Vec<ChatBot>, ClientError>;
    /// An empty `platform` lists everything.
    async fn get_integration_status(&self, platform: &str) -> Result<Vec<ChatBot>, ClientError>;
    async fn delete_chat_bot(&self, id: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct ChatBotApi {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ChatBotApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ChatBotApi {
    /// `base_url` is the collection URL, e.g. `http://host:8080/api/chatbots`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Err(ClientError::Api { status, message })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let text = Self::check(response).await?.text().await?;
        decode(&text)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    Ok(serde_json::from_str(text)?)
}

#[async_trait]
impl ChatBotGateway for ChatBotApi {
    async fn add_chat_bot(&self, chatbot: &NewChatBot) -> Result<ChatBot, ClientError> {
        debug!(url = %self.base_url, "POST chatbot");
        let response = self.http.post(&self.base_url).json(chatbot).send().await?;
        Self::parse(response).await
    }

    async fn get_chat_bots(&self) -> Result<Vec<ChatBot>, ClientError> {
        let response = self.http.get(&self.base_url).send().await?;
        Self::parse(response).await
    }

    async fn get_integration_status(&self, platform: &str) -> Result<Vec<ChatBot>, ClientError> {
        let mut request = self.http.get(format!("{}/integration", self.base_url));
        if !platform.is_empty() {
            request = request.query(&[("platform", platform)]);
        }
        let response = request.send().await?;
        Self::parse(response).await
    }

    async fn delete_chat_bot(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/{}", self.base_url, urlencoding::encode(id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
