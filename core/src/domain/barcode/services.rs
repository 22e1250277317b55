use crate::domain::{
    barcode::{
        entities::BarcodeInfo,
        ports::{BarcodeRepository, BarcodeService},
    },
    common::{entities::app_errors::CoreError, services::Service},
    flow::ports::LLMClient,
    product::ports::ProductRepository,
};

impl<PR, BR, LLM> BarcodeService for Service<PR, BR, LLM>
where
    PR: ProductRepository,
    BR: BarcodeRepository,
    LLM: LLMClient,
{
    async fn lookup_barcode(&self, barcode: String) -> Result<Option<BarcodeInfo>, CoreError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(CoreError::Invalid("Please enter a barcode.".to_string()));
        }

        self.barcode_repository.lookup(barcode.to_string()).await
    }
}
