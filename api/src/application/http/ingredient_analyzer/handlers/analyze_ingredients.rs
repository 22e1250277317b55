use axum::extract::State;
use nutritrack_core::domain::analysis::{
    AnalysisService, AnalyzeIngredientsInput, AnalyzeIngredientsOutput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_analyzer::validators::AnalyzeIngredientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeIngredientsResponse {
    pub data: AnalyzeIngredientsOutput,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "ingredient-analyzer",
    summary = "Analyze ingredients",
    description = "Explains the health effects, FSSAI limits and common sources of a list of ingredients.",
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, description = "Empty ingredient list"),
        (status = 502, description = "The AI backend produced no structured analysis")
    ),
    request_body = AnalyzeIngredientsValidator
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsValidator>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_ingredients(AnalyzeIngredientsInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse { data: analysis }))
}
