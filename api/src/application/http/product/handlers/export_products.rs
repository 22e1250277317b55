use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use nutritrack_core::domain::product::{csv::CSV_FILE_NAME, ports::ProductService};

use crate::application::http::{
    product::validators::ListProductsQuery,
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    get,
    path = "/export",
    tag = "product",
    summary = "Export tracked products as CSV",
    description = "Downloads the filtered and sorted product list as a CSV file.",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "CSV document", content_type = "text/csv", body = String),
        (status = 400, description = "Nothing to export")
    )
)]
pub async fn export_products(
    Query(query): Query<ListProductsQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = state
        .service
        .export_products_csv(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        csv,
    ))
}
