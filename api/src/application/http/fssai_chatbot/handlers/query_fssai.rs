use axum::extract::State;
use nutritrack_core::domain::analysis::{AnalysisService, FssaiChatInput, FssaiChatOutput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    fssai_chatbot::validators::FssaiQueryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FssaiQueryResponse {
    pub data: FssaiChatOutput,
}

#[utoipa::path(
    post,
    path = "/query",
    tag = "fssai-chatbot",
    summary = "Ask about FSSAI regulations",
    description = "Answers a single question about Indian food safety rules. The answer always ends with a disclaimer and falls back to an apology when the AI backend fails.",
    responses(
        (status = 200, body = FssaiQueryResponse),
        (status = 400, description = "Empty question")
    ),
    request_body = FssaiQueryValidator
)]
pub async fn query_fssai(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FssaiQueryValidator>,
) -> Result<Response<FssaiQueryResponse>, ApiError> {
    let answer = state
        .service
        .fssai_query(FssaiChatInput {
            query: payload.query,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FssaiQueryResponse { data: answer }))
}
