use axum::extract::State;
use nutritrack_core::domain::product::{entities::TrackedProduct, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product::validators::AddProductValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddProductResponse {
    pub data: TrackedProduct,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Track a product",
    description = "Adds a product to the tracker. A known barcode fills in the name and ingredients when they are left out.",
    responses(
        (status = 201, body = AddProductResponse),
        (status = 400, description = "Missing expiry date, product name or invalid quantity")
    ),
    request_body = AddProductValidator
)]
pub async fn add_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddProductValidator>,
) -> Result<Response<AddProductResponse>, ApiError> {
    let product = state
        .service
        .add_product(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddProductResponse { data: product }))
}
