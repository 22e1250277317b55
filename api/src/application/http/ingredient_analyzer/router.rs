use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients};
use super::handlers::analyze_product::{__path_analyze_product, analyze_product};
use super::handlers::summarize_analysis::{__path_summarize_analysis, summarize_analysis};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_ingredients, analyze_product, summarize_analysis))]
pub struct IngredientAnalyzerApiDoc;

pub fn ingredient_analyzer_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredient-analyzer/ingredients", root_path),
            post(analyze_ingredients),
        )
        .route(
            &format!("{}/ingredient-analyzer/product", root_path),
            post(analyze_product),
        )
        .route(
            &format!("{}/ingredient-analyzer/summary", root_path),
            post(summarize_analysis),
        )
}
