use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::entities::ExpiryStatus;

#[derive(Debug, Clone, Default)]
pub struct AddProductInput {
    /// Looked up in the barcode catalogue when no product name is given.
    pub barcode: Option<String>,
    pub product_name: Option<String>,
    pub ingredients: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortKey {
    ProductName,
    #[default]
    ExpiryDate,
    UploadDate,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct ListProductsFilter {
    pub status: Option<ExpiryStatus>,
    pub sort_by: ProductSortKey,
    pub direction: SortDirection,
}
