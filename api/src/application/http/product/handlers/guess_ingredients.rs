use axum::extract::State;
use nutritrack_core::domain::analysis::{
    AnalysisService, GuessIngredientsInput, GuessIngredientsOutput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product::validators::GuessIngredientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GuessIngredientsResponse {
    pub data: GuessIngredientsOutput,
}

#[utoipa::path(
    post,
    path = "/guess-ingredients",
    tag = "product",
    summary = "Suggest ingredients for a product",
    description = "Guesses a comma-separated ingredient list from a product name. `ingredients` is null when no guess could be made.",
    responses(
        (status = 200, body = GuessIngredientsResponse),
        (status = 400, description = "Empty product name")
    ),
    request_body = GuessIngredientsValidator
)]
pub async fn guess_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GuessIngredientsValidator>,
) -> Result<Response<GuessIngredientsResponse>, ApiError> {
    let guess = state
        .service
        .guess_ingredients(GuessIngredientsInput {
            product_name: payload.product_name.trim().to_string(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GuessIngredientsResponse { data: guess }))
}
