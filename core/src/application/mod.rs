use tracing::info;

use crate::{
    domain::common::{NutriTrackConfig, services::Service},
    infrastructure::{
        barcode::repositories::json_barcode_repository::JsonBarcodeRepository,
        llm::GeminiLLMClient,
        product::repositories::local_product_repository::LocalProductRepository,
    },
};

pub type NutriTrackService =
    Service<LocalProductRepository, JsonBarcodeRepository, GeminiLLMClient>;

pub async fn create_service(config: NutriTrackConfig) -> Result<NutriTrackService, anyhow::Error> {
    let product_repository = match &config.storage.products_file {
        Some(path) => {
            info!("Loading tracked products from {}", path.display());
            LocalProductRepository::open(path).await?
        }
        None => LocalProductRepository::in_memory(),
    };

    let barcode_repository = JsonBarcodeRepository::new(&config.storage.barcodes_file);

    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is empty, AI flows will fall back or fail");
    }

    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model)
        .with_base_url(config.llm.gemini_base_url);

    Ok(Service::new(
        product_repository,
        barcode_repository,
        llm_client,
    ))
}
