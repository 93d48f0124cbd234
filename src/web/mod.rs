use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::services::ChatBotStore;
use crate::web::routes::*;

pub use crate::web::error::AppError;

pub mod error;
pub mod models;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub chatbot_store: Arc<dyn ChatBotStore>,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_axum_router(chatbot_store: Arc<dyn ChatBotStore>) -> Router {
    let app_state = Arc::new(AppState { chatbot_store });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check_handler))
        .nest("/api/chatbots", create_chatbots_router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
