use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalogue entry for a known barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeInfo {
    pub barcode: String,
    pub product_name: String,
    #[serde(default)]
    pub ingredients: String,
}
