use axum::extract::{Path, State};
use nutritrack_core::domain::product::{entities::TrackedProduct, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    product::validators::UpdateQuantityValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateQuantityResponse {
    pub data: TrackedProduct,
}

#[utoipa::path(
    patch,
    path = "/{product_id}/quantity",
    tag = "product",
    summary = "Change product quantity",
    description = "Adds a signed change to the quantity. The result never drops below one.",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = UpdateQuantityResponse),
        (status = 404, description = "Product not found")
    ),
    request_body = UpdateQuantityValidator
)]
pub async fn update_quantity(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateQuantityValidator>,
) -> Result<Response<UpdateQuantityResponse>, ApiError> {
    let product = state
        .service
        .update_quantity(product_id, payload.change)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateQuantityResponse { data: product }))
}
