use axum::extract::{Path, State};
use nutritrack_core::domain::barcode::{entities::BarcodeInfo, ports::BarcodeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LookupBarcodeResponse {
    pub data: BarcodeInfo,
}

#[utoipa::path(
    get,
    path = "/{barcode}",
    tag = "barcode",
    summary = "Look up a barcode",
    description = "Finds the product name and ingredients registered for a barcode in the local catalogue.",
    params(
        ("barcode" = String, Path, description = "Barcode digits"),
    ),
    responses(
        (status = 200, body = LookupBarcodeResponse),
        (status = 404, description = "Barcode not in the catalogue")
    )
)]
pub async fn lookup_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<LookupBarcodeResponse>, ApiError> {
    let info = state
        .service
        .lookup_barcode(barcode)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::NotFound(
                "No product found for this barcode. You can add it manually.".to_string(),
            )
        })?;

    Ok(Response::OK(LookupBarcodeResponse { data: info }))
}
