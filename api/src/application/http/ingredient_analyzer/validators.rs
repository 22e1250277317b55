use nutritrack_core::domain::analysis::SummarizeAnalysisInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::non_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsValidator {
    #[validate(
        custom(function = "non_blank", message = "Please enter a list of ingredients."),
        length(max = 5000, message = "ingredients must be at most 5000 characters")
    )]
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProductValidator {
    #[validate(
        custom(function = "non_blank", message = "Please enter a product name."),
        length(max = 200, message = "productName must be at most 200 characters")
    )]
    pub product_name: String,
}

/// A previous ingredient analysis. Every field may be omitted.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizeAnalysisValidator {
    pub introduction: String,
    pub harmful_effects: Vec<String>,
    pub fssai_limits: String,
    pub common_products: Vec<String>,
    pub overall_summary: String,
}

impl From<SummarizeAnalysisValidator> for SummarizeAnalysisInput {
    fn from(payload: SummarizeAnalysisValidator) -> Self {
        Self {
            introduction: payload.introduction,
            harmful_effects: payload.harmful_effects,
            fssai_limits: payload.fssai_limits,
            common_products: payload.common_products,
            overall_summary: payload.overall_summary,
        }
    }
}
