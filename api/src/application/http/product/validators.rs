use chrono::NaiveDate;
use nutritrack_core::domain::product::{
    entities::ExpiryStatus,
    value_objects::{AddProductInput, ListProductsFilter, ProductSortKey, SortDirection},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::server::api_entities::api_error::non_blank;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductValidator {
    /// Looked up in the barcode catalogue to fill in missing details.
    #[serde(default)]
    pub barcode: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "productName must be at most 200 characters"))]
    pub product_name: Option<String>,

    #[serde(default)]
    pub ingredients: Option<String>,

    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(range(min = 1, message = "Quantity must be at least 1."))]
    pub quantity: Option<u32>,

    #[serde(default)]
    pub category: Option<String>,
}

impl From<AddProductValidator> for AddProductInput {
    fn from(payload: AddProductValidator) -> Self {
        Self {
            barcode: payload.barcode,
            product_name: payload.product_name,
            ingredients: payload.ingredients,
            expiry_date: payload.expiry_date,
            quantity: payload.quantity,
            category: payload.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantityValidator {
    /// Signed amount added to the current quantity.
    #[validate(range(
        min = -100_000,
        max = 100_000,
        message = "change must be between -100000 and 100000"
    ))]
    pub change: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessIngredientsValidator {
    #[validate(custom(
        function = "non_blank",
        message = "Please provide a product name before suggesting ingredients."
    ))]
    pub product_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// `Valid`, `Near Expiry` or `Expired`.
    #[param(value_type = Option<String>)]
    pub status: Option<ExpiryStatus>,
    pub sort_by: Option<ProductSortKey>,
    pub direction: Option<SortDirection>,
}

impl From<ListProductsQuery> for ListProductsFilter {
    fn from(query: ListProductsQuery) -> Self {
        Self {
            status: query.status,
            sort_by: query.sort_by.unwrap_or_default(),
            direction: query.direction.unwrap_or_default(),
        }
    }
}
