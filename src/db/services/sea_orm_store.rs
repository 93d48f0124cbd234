use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Schema, Set,
};
use tracing::{debug, info};

use super::{new_record_id, platform_key, ChatBotStore, StoreError};
use crate::db::entities::chatbot;
use crate::db::models::{ChatBot, NewChatBot};

/// Store backed by a relational database through SeaORM.
#[derive(Debug, Clone)]
pub struct SeaOrmChatBotStore {
    db: DatabaseConnection,
}

impl SeaOrmChatBotStore {
    /// Connects to `database_url` and makes sure the `chatbots` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(max_connections).sqlx_logging(false);
        let db = Database::connect(opt).await?;
        let store = Self::from_connection(db);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut create_table = schema.create_table_from_entity(chatbot::Entity);
        create_table.if_not_exists();
        self.db.execute(backend.build(&create_table)).await?;
        info!(backend = ?backend, "Chatbot table ready.");
        Ok(())
    }
}

#[async_trait]
impl ChatBotStore for SeaOrmChatBotStore {
    async fn create(&self, new_chatbot: NewChatBot) -> Result<ChatBot, StoreError> {
        if let Some(message) = new_chatbot.validation_message() {
            return Err(StoreError::Validation(message));
        }
        let new_model = chatbot::ActiveModel {
            id: Set(new_record_id()),
            bot_name: Set(new_chatbot.bot_name),
            platform_key: Set(platform_key(&new_chatbot.platform)),
            platform: Set(new_chatbot.platform),
            intent: Set(new_chatbot.intent),
            response: Set(new_chatbot.response),
            created_at: Set(Utc::now()),
        };
        let model = new_model.insert(&self.db).await?;
        debug!(id = %model.id, "Inserted chatbot.");
        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<ChatBot>, StoreError> {
        let models = chatbot::Entity::find()
            .order_by_asc(chatbot::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(ChatBot::from).collect())
    }

    async fn find_by_platform(&self, platform: &str) -> Result<Vec<ChatBot>, StoreError> {
        let models = chatbot::Entity::find()
            .filter(chatbot::Column::PlatformKey.eq(platform_key(platform)))
            .order_by_asc(chatbot::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(ChatBot::from).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let result = chatbot::Entity::delete_many()
            .filter(chatbot::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
