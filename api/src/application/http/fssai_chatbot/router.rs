use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::query_fssai::{__path_query_fssai, query_fssai};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(query_fssai))]
pub struct FssaiChatbotApiDoc;

pub fn fssai_chatbot_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{}/fssai-chatbot/query", root_path),
        post(query_fssai),
    )
}
