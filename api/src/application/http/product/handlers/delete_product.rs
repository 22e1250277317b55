use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use nutritrack_core::domain::product::ports::ProductService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Stop tracking a product",
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product removed"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .remove_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
