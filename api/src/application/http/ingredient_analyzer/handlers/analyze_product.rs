use axum::extract::State;
use nutritrack_core::domain::analysis::{AnalysisService, AnalyzeProductInput, AnalyzeProductOutput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient_analyzer::validators::AnalyzeProductValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeProductResponse {
    pub data: AnalyzeProductOutput,
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "ingredient-analyzer",
    summary = "Analyze a product by name",
    description = "Guesses the typical ingredients of a product and reviews each one.",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "Empty product name"),
        (status = 502, description = "The AI backend produced no structured analysis")
    ),
    request_body = AnalyzeProductValidator
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeProductValidator>,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_product(AnalyzeProductInput {
            product_name: payload.product_name.trim().to_string(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: analysis }))
}
