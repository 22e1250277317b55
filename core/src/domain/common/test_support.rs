use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::{
    domain::{
        barcode::{entities::BarcodeInfo, ports::BarcodeRepository},
        common::{entities::app_errors::CoreError, services::Service},
        flow::ports::LLMClient,
    },
    infrastructure::product::repositories::local_product_repository::LocalProductRepository,
};

type Script = dyn Fn(&str) -> (Duration, Result<String, CoreError>) + Send + Sync;

/// LLM stand-in whose answer (and latency) is chosen from the prompt text.
#[derive(Clone)]
pub struct ScriptedLLMClient {
    script: Arc<Script>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLLMClient {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&str) -> (Duration, Result<String, CoreError>) + Send + Sync + 'static,
    {
        Self {
            script: Arc::new(script),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn replying(raw: &str) -> Self {
        let raw = raw.to_string();
        Self::new(move |_| (Duration::ZERO, Ok(raw.clone())))
    }

    pub fn failing() -> Self {
        Self::new(|_| {
            (
                Duration::ZERO,
                Err(CoreError::ExternalServiceError(
                    "LLM API returned error: 503".to_string(),
                )),
            )
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = (self.script)(&prompt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}

#[derive(Clone)]
pub struct StaticBarcodeRepository {
    entries: Vec<BarcodeInfo>,
}

impl Default for StaticBarcodeRepository {
    fn default() -> Self {
        Self {
            entries: vec![BarcodeInfo {
                barcode: "8901234567890".to_string(),
                product_name: "Masala Noodles".to_string(),
                ingredients: "Wheat Flour, Palm Oil, Salt".to_string(),
            }],
        }
    }
}

impl BarcodeRepository for StaticBarcodeRepository {
    async fn lookup(&self, barcode: String) -> Result<Option<BarcodeInfo>, CoreError> {
        Ok(self.entries.iter().find(|e| e.barcode == barcode).cloned())
    }
}

pub type TestService = Service<LocalProductRepository, StaticBarcodeRepository, ScriptedLLMClient>;

pub fn test_service(llm_client: ScriptedLLMClient) -> TestService {
    Service::new(
        LocalProductRepository::in_memory(),
        StaticBarcodeRepository::default(),
        llm_client,
    )
}
