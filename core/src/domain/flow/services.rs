use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    flow::{
        entities::{FlowDefinition, FlowFailure},
        ports::LLMClient,
    },
};

/// Runs flow definitions against a generative backend. Holds no per-call state,
/// so concurrent executions never observe each other.
#[derive(Debug, Clone)]
pub struct FlowEngine<LLM> {
    llm_client: LLM,
}

impl<LLM> FlowEngine<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }

    /// One request/response cycle. The backend is called exactly once; any
    /// failure is logged and resolved through the flow's [`FailurePolicy`].
    ///
    /// [`FailurePolicy`]: crate::domain::flow::entities::FailurePolicy
    pub async fn execute<I, O>(&self, flow: &FlowDefinition<O>, request: &I) -> Result<O, CoreError>
    where
        I: Serialize + Sync + ?Sized,
        O: DeserializeOwned + Send,
    {
        let prompt = flow.render_prompt(request);
        debug!(flow = flow.name, prompt_len = prompt.len(), "dispatching flow");

        match self.generate(flow, prompt).await {
            Ok(output) => {
                info!(flow = flow.name, "flow produced structured output");
                Ok(output)
            }
            Err(failure) => {
                error!(
                    flow = flow.name,
                    reason = %failure,
                    "AI failed to generate valid structured output"
                );
                flow.on_failure.resolve(flow.name)
            }
        }
    }

    async fn generate<O>(&self, flow: &FlowDefinition<O>, prompt: String) -> Result<O, FlowFailure>
    where
        O: DeserializeOwned,
    {
        let raw = self
            .llm_client
            .generate_with_text(prompt, flow.output_schema.to_json_schema())
            .await
            .map_err(|e| FlowFailure::BackendUnavailable(e.to_string()))?;

        flow.parse_output(&raw)
    }
}
