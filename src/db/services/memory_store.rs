use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{new_record_id, platform_key, ChatBotStore, StoreError};
use crate::db::models::{ChatBot, NewChatBot};

/// In-process store. Records live in insertion order behind a lock that
/// serializes writers.
#[derive(Debug, Default)]
pub struct MemoryChatBotStore {
    records: RwLock<Vec<ChatBot>>,
}

impl MemoryChatBotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatBotStore for MemoryChatBotStore {
    async fn create(&self, new_chatbot: NewChatBot) -> Result<ChatBot, StoreError> {
        if let Some(message) = new_chatbot.validation_message() {
            return Err(StoreError::Validation(message));
        }
        let chatbot = new_chatbot.into_chatbot(new_record_id());
        self.records.write().await.push(chatbot.clone());
        debug!(id = %chatbot.id, "Stored chatbot in memory.");
        Ok(chatbot)
    }

    async fn find_all(&self) -> Result<Vec<ChatBot>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_platform(&self, platform: &str) -> Result<Vec<ChatBot>, StoreError> {
        let wanted = platform_key(platform);
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|chatbot| platform_key(&chatbot.platform) == wanted)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|chatbot| chatbot.id != id);
        Ok((before - records.len()) as u64)
    }
}
