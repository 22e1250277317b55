use axum::extract::State;
use nutritrack_core::domain::analysis::{AnalysisService, SummarizeAnalysisOutput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_analyzer::validators::SummarizeAnalysisValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummarizeAnalysisResponse {
    pub data: SummarizeAnalysisOutput,
}

#[utoipa::path(
    post,
    path = "/summary",
    tag = "ingredient-analyzer",
    summary = "Summarize an ingredient analysis",
    description = "Condenses a detailed ingredient analysis into a few key points.",
    responses(
        (status = 200, body = SummarizeAnalysisResponse),
        (status = 502, description = "The AI backend produced no summary")
    ),
    request_body = SummarizeAnalysisValidator
)]
pub async fn summarize_analysis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SummarizeAnalysisValidator>,
) -> Result<Response<SummarizeAnalysisResponse>, ApiError> {
    let summary = state
        .service
        .summarize_analysis(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SummarizeAnalysisResponse { data: summary }))
}
