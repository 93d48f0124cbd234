//! Persistence for chatbot records.
//!
//! Handlers only talk to the [`ChatBotStore`] trait. Two backends exist: an
//! in-process store used when no database is configured, and a SeaORM store
//! for Postgres or SQLite.

pub mod memory_store;
pub mod sea_orm_store;

pub use memory_store::MemoryChatBotStore;
pub use sea_orm_store::SeaOrmChatBotStore;

use async_trait::async_trait;

use crate::db::models::{ChatBot, NewChatBot};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Schema validation rejected the document.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),
    /// The backend could not serve the request at all.
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ChatBotStore: Send + Sync {
    /// Validates and persists a new record, assigning its id.
    async fn create(&self, new_chatbot: NewChatBot) -> Result<ChatBot, StoreError>;

    /// Every record, in store order.
    async fn find_all(&self) -> Result<Vec<ChatBot>, StoreError>;

    /// Records whose platform equals `platform`, ignoring case.
    async fn find_by_platform(&self, platform: &str) -> Result<Vec<ChatBot>, StoreError>;

    /// Removes the record with `id`, returning how many rows went away.
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;
}

pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn platform_key(platform: &str) -> String {
    platform.to_lowercase()
}
