pub mod config;

use std::sync::Arc;
use tracing::info;

use crate::db::services::{ChatBotStore, MemoryChatBotStore, SeaOrmChatBotStore};
use crate::server::config::ServerConfig;

/// Opens the store selected by `config`.
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn ChatBotStore>, sea_orm::DbErr> {
    match config.database_url.as_deref() {
        Some(database_url) => {
            let store = SeaOrmChatBotStore::connect(database_url, config.max_connections).await?;
            info!(max_connections = config.max_connections, "Using database-backed chatbot store.");
            Ok(Arc::new(store))
        }
        None => {
            info!("DATABASE_URL not set, keeping chatbots in memory.");
            Ok(Arc::new(MemoryChatBotStore::new()))
        }
    }
}
