use crate::domain::{
    barcode::ports::BarcodeRepository,
    flow::{ports::LLMClient, services::FlowEngine},
    product::ports::ProductRepository,
};

/// Aggregate service that every domain service trait is implemented on.
#[derive(Clone)]
pub struct Service<PR, BR, LLM>
where
    PR: ProductRepository,
    BR: BarcodeRepository,
    LLM: LLMClient,
{
    pub(crate) product_repository: PR,
    pub(crate) barcode_repository: BR,
    pub(crate) flow_engine: FlowEngine<LLM>,
}

impl<PR, BR, LLM> Service<PR, BR, LLM>
where
    PR: ProductRepository,
    BR: BarcodeRepository,
    LLM: LLMClient,
{
    pub fn new(product_repository: PR, barcode_repository: BR, llm_client: LLM) -> Self {
        Self {
            product_repository,
            barcode_repository,
            flow_engine: FlowEngine::new(llm_client),
        }
    }
}
