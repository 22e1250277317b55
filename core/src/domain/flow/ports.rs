use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling generative models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` and asks for a JSON answer shaped like `response_schema`.
    /// Returns the raw model text.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
