use utoipa::OpenApi;

use crate::application::http::{
    barcode::router::BarcodeApiDoc, fssai_chatbot::router::FssaiChatbotApiDoc,
    health::HealthApiDoc, ingredient_analyzer::router::IngredientAnalyzerApiDoc,
    product::router::ProductApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriTrack API"
    ),
    nest(
        (path = "/ingredient-analyzer", api = IngredientAnalyzerApiDoc),
        (path = "/fssai-chatbot", api = FssaiChatbotApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/barcodes", api = BarcodeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
