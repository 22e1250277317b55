use axum::extract::{Query, State};
use nutritrack_core::domain::product::{entities::TrackedProduct, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product::validators::ListProductsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<TrackedProduct>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List tracked products",
    description = "Lists tracked products with their expiry status recomputed for today, optionally filtered by status and sorted.",
    params(ListProductsQuery),
    responses(
        (status = 200, body = GetProductsResponse)
    )
)]
pub async fn get_products(
    Query(query): Query<ListProductsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let products = state
        .service
        .list_products(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
