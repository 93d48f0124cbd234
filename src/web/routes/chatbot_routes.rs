use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::db::models::{ChatBot, NewChatBot};
use crate::web::models::IntegrationQuery;
use crate::web::{AppError, AppState};

// --- Route Handlers ---

async fn add_chatbot_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<NewChatBot>, JsonRejection>,
) -> Result<Json<ChatBot>, AppError> {
    let Json(new_chatbot) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed chatbot payload.");
        AppError::from(rejection)
    })?;

    // Every failure on this path is reported as a validation error.
    let chatbot = app_state
        .chatbot_store
        .create(new_chatbot)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create chatbot.");
            AppError::InvalidInput(e.to_string())
        })?;

    info!(id = %chatbot.id, platform = %chatbot.platform, "Chatbot created.");
    Ok(Json(chatbot))
}

async fn get_all_chatbots_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChatBot>>, AppError> {
    let chatbots = app_state
        .chatbot_store
        .find_all()
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list chatbots.");
            AppError::DatabaseError(e.to_string())
        })?;
    Ok(Json(chatbots))
}

async fn get_integration_by_platform_handler(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<IntegrationQuery>,
) -> Result<Json<Vec<ChatBot>>, AppError> {
    let result = match query.platform_filter() {
        Some(platform) => app_state.chatbot_store.find_by_platform(platform).await,
        None => app_state.chatbot_store.find_all().await,
    };
    let chatbots = result.map_err(|e| {
        error!(error = %e, platform = ?query.platform, "Failed to list chatbots by platform.");
        AppError::DatabaseError(e.to_string())
    })?;
    Ok(Json(chatbots))
}

async fn delete_chatbot_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let rows_affected = app_state
        .chatbot_store
        .delete_by_id(&id)
        .await
        .map_err(|e| {
            error!(error = %e, id = %id, "Failed to delete chatbot.");
            AppError::DatabaseError(e.to_string())
        })?;

    // A missing record is not an error.
    info!(id = %id, rows_affected, "Chatbot delete handled.");
    Ok(StatusCode::OK)
}

// --- Router ---

pub fn create_chatbots_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_all_chatbots_handler).post(add_chatbot_handler))
        .route("/integration", get(get_integration_by_platform_handler))
        .route("/{id}", delete(delete_chatbot_handler))
}
