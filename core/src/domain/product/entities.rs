use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, product::value_objects::ProductPatch};

/// Products expiring within this many days are flagged as near expiry.
pub const NEAR_EXPIRY_DAYS: i64 = 7;

pub const MANUAL_BARCODE: &str = "MANUAL";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const UNKNOWN_INGREDIENTS: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExpiryStatus {
    Valid,
    #[serde(rename = "Near Expiry")]
    NearExpiry,
    Expired,
}

impl ExpiryStatus {
    pub fn from_expiry(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        let days_until_expiry = (expiry_date - today).num_days();

        if days_until_expiry < 0 {
            ExpiryStatus::Expired
        } else if days_until_expiry <= NEAR_EXPIRY_DAYS {
            ExpiryStatus::NearExpiry
        } else {
            ExpiryStatus::Valid
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExpiryStatus::Valid => "Valid",
            ExpiryStatus::NearExpiry => "Near Expiry",
            ExpiryStatus::Expired => "Expired",
        }
    }

    /// Sort order: valid first, expired last.
    pub fn rank(&self) -> u8 {
        match self {
            ExpiryStatus::Valid => 1,
            ExpiryStatus::NearExpiry => 2,
            ExpiryStatus::Expired => 3,
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpiryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "valid" => Ok(ExpiryStatus::Valid),
            "near expiry" | "near_expiry" | "near-expiry" => Ok(ExpiryStatus::NearExpiry),
            "expired" => Ok(ExpiryStatus::Expired),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProduct {
    pub id: Uuid,
    pub product_name: String,
    pub barcode: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_category")]
    pub category: String,
    pub expiry_date: NaiveDate,
    pub upload_date: NaiveDate,
    pub status: ExpiryStatus,
    pub ingredients: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl TrackedProduct {
    pub fn new(
        product_name: String,
        barcode: String,
        quantity: u32,
        category: String,
        expiry_date: NaiveDate,
        ingredients: String,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            product_name,
            barcode,
            quantity,
            category,
            expiry_date,
            upload_date: today,
            status: ExpiryStatus::from_expiry(expiry_date, today),
            ingredients,
        }
    }

    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.status = ExpiryStatus::from_expiry(self.expiry_date, today);
    }

    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(product_name) = patch.product_name {
            self.product_name = product_name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity.max(1);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(expiry_date) = patch.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn status_boundaries() {
        let today = date("2024-05-10");

        assert_eq!(ExpiryStatus::from_expiry(date("2024-05-09"), today), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_expiry(date("2024-05-10"), today), ExpiryStatus::NearExpiry);
        assert_eq!(ExpiryStatus::from_expiry(date("2024-05-17"), today), ExpiryStatus::NearExpiry);
        assert_eq!(ExpiryStatus::from_expiry(date("2024-05-18"), today), ExpiryStatus::Valid);
    }

    #[test]
    fn status_serializes_with_display_names() {
        assert_eq!(
            serde_json::to_string(&ExpiryStatus::NearExpiry).expect("serializable"),
            "\"Near Expiry\""
        );
        assert_eq!("near-expiry".parse::<ExpiryStatus>(), Ok(ExpiryStatus::NearExpiry));
    }

    #[test]
    fn legacy_records_default_quantity_and_category() {
        let product: TrackedProduct = serde_json::from_str(
            r#"{
                "id": "0190c7a0-0000-7000-8000-000000000000",
                "productName": "Milk",
                "barcode": "MANUAL",
                "expiryDate": "2024-05-12",
                "uploadDate": "2024-05-01",
                "status": "Valid",
                "ingredients": "Milk"
            }"#,
        )
        .expect("legacy record");

        assert_eq!(product.quantity, 1);
        assert_eq!(product.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn patch_keeps_quantity_positive() {
        let mut product = TrackedProduct::new(
            "Milk".to_string(),
            MANUAL_BARCODE.to_string(),
            2,
            DEFAULT_CATEGORY.to_string(),
            date("2024-05-12"),
            "Milk".to_string(),
            date("2024-05-01"),
        );

        product.apply(ProductPatch {
            quantity: Some(0),
            ..ProductPatch::default()
        });

        assert_eq!(product.quantity, 1);
        assert_eq!(product.status, ExpiryStatus::Valid);
    }
}
