use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::lookup_barcode::{__path_lookup_barcode, lookup_barcode};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(lookup_barcode))]
pub struct BarcodeApiDoc;

pub fn barcode_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{}/barcodes/{{barcode}}", root_path),
        get(lookup_barcode),
    )
}
