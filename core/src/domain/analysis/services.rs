use crate::domain::{
    analysis::{
        fssai_chat::{FSSAI_CHAT_FLOW, FssaiChatInput, FssaiChatOutput},
        guess::{GUESS_INGREDIENTS_FLOW, GuessIngredientsInput, GuessIngredientsOutput},
        ingredients::{ANALYZE_INGREDIENTS_FLOW, AnalyzeIngredientsInput, AnalyzeIngredientsOutput},
        ports::AnalysisService,
        product::{ANALYZE_PRODUCT_FLOW, AnalyzeProductInput, AnalyzeProductOutput},
        summary::{SUMMARIZE_ANALYSIS_FLOW, SummarizeAnalysisInput, SummarizeAnalysisOutput},
    },
    barcode::ports::BarcodeRepository,
    common::{entities::app_errors::CoreError, services::Service},
    flow::ports::LLMClient,
    product::ports::ProductRepository,
};

impl<PR, BR, LLM> AnalysisService for Service<PR, BR, LLM>
where
    PR: ProductRepository,
    BR: BarcodeRepository,
    LLM: LLMClient,
{
    async fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<AnalyzeIngredientsOutput, CoreError> {
        self.flow_engine
            .execute(&ANALYZE_INGREDIENTS_FLOW, &input)
            .await
    }

    async fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<AnalyzeProductOutput, CoreError> {
        self.flow_engine.execute(&ANALYZE_PRODUCT_FLOW, &input).await
    }

    async fn guess_ingredients(
        &self,
        input: GuessIngredientsInput,
    ) -> Result<GuessIngredientsOutput, CoreError> {
        self.flow_engine
            .execute(&GUESS_INGREDIENTS_FLOW, &input)
            .await
    }

    async fn summarize_analysis(
        &self,
        input: SummarizeAnalysisInput,
    ) -> Result<SummarizeAnalysisOutput, CoreError> {
        self.flow_engine
            .execute(&SUMMARIZE_ANALYSIS_FLOW, &input)
            .await
    }

    async fn fssai_query(&self, input: FssaiChatInput) -> Result<FssaiChatOutput, CoreError> {
        let output = self.flow_engine.execute(&FSSAI_CHAT_FLOW, &input).await?;

        Ok(output.with_disclaimer())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        analysis::fssai_chat::{FSSAI_APOLOGY, FSSAI_DISCLAIMER},
        common::test_support::{ScriptedLLMClient, test_service},
    };

    const ANALYSIS_REPLY: &str = r#"{
        "introduction": "Sugar and salt are common additives.",
        "harmfulEffects": ["Excess sugar raises blood glucose.", "Excess salt raises blood pressure."],
        "fssaiLimits": "No specific limit for table sugar.",
        "commonProducts": ["Biscuits", "Chips"],
        "overallSummary": "Fine in moderation."
    }"#;

    #[tokio::test]
    async fn analysis_returns_structured_output_from_one_call() {
        let llm = ScriptedLLMClient::replying(ANALYSIS_REPLY);
        let service = test_service(llm.clone());

        let output = service
            .analyze_ingredients(AnalyzeIngredientsInput {
                ingredients: "Sugar, Salt".to_string(),
            })
            .await
            .expect("analysis");

        assert_eq!(output.harmful_effects.len(), 2);
        assert_eq!(output.common_products, vec!["Biscuits", "Chips"]);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn raising_flows_surface_their_message() {
        let service = test_service(ScriptedLLMClient::replying("not json at all"));

        let analysis = service
            .analyze_ingredients(AnalyzeIngredientsInput {
                ingredients: "Sugar".to_string(),
            })
            .await;
        assert_eq!(
            analysis.map_err(|e| e.to_string()),
            Err("AI analysis failed to produce structured output.".to_string())
        );

        let product = service
            .analyze_product(AnalyzeProductInput {
                product_name: "Cola".to_string(),
            })
            .await;
        assert_eq!(
            product.map_err(|e| e.to_string()),
            Err("AI product analysis failed to produce structured output.".to_string())
        );

        let summary = service
            .summarize_analysis(SummarizeAnalysisInput::default())
            .await;
        assert_eq!(
            summary.map_err(|e| e.to_string()),
            Err("AI summarization failed to produce structured output.".to_string())
        );
    }

    #[tokio::test]
    async fn backend_errors_follow_the_same_policy() {
        let service = test_service(ScriptedLLMClient::failing());

        assert!(matches!(
            service
                .analyze_ingredients(AnalyzeIngredientsInput {
                    ingredients: "Sugar".to_string(),
                })
                .await,
            Err(CoreError::FlowExecution { .. })
        ));

        let guess = service
            .guess_ingredients(GuessIngredientsInput {
                product_name: "Mystery Snack".to_string(),
            })
            .await
            .expect("guess never fails");
        assert_eq!(guess.ingredients, None);
    }

    #[tokio::test]
    async fn guess_falls_back_to_null_on_bad_shape() {
        let service = test_service(ScriptedLLMClient::replying(r#"{"ingredients": 42}"#));

        let guess = service
            .guess_ingredients(GuessIngredientsInput {
                product_name: "Cola".to_string(),
            })
            .await
            .expect("guess never fails");

        assert_eq!(guess, GuessIngredientsOutput { ingredients: None });
    }

    #[tokio::test]
    async fn chat_appends_disclaimer_once() {
        let service = test_service(ScriptedLLMClient::replying(
            r#"{"response": "Maximum caffeine in carbonated drinks is 145 ppm."}"#,
        ));

        let output = service
            .fssai_query(FssaiChatInput {
                query: "caffeine limit?".to_string(),
            })
            .await
            .expect("chat never fails");

        assert!(output.response.starts_with("Maximum caffeine"));
        assert!(output.response.ends_with(FSSAI_DISCLAIMER));
        assert_eq!(output.response.matches(FSSAI_DISCLAIMER).count(), 1);
    }

    #[tokio::test]
    async fn chat_apologizes_when_answer_is_empty() {
        for reply in [r#"{"response": "   "}"#, "", "{\"answer\": \"hi\"}"] {
            let service = test_service(ScriptedLLMClient::replying(reply));

            let output = service
                .fssai_query(FssaiChatInput {
                    query: "What is FSSAI?".to_string(),
                })
                .await
                .expect("chat never fails");

            assert!(output.response.starts_with(FSSAI_APOLOGY));
            assert!(output.response.ends_with(FSSAI_DISCLAIMER));
        }
    }

    #[tokio::test]
    async fn concurrent_calls_do_not_share_state() {
        let llm = ScriptedLLMClient::new(|prompt| {
            if prompt.contains("Sugar, Salt") {
                (Duration::from_millis(60), Ok(ANALYSIS_REPLY.to_string()))
            } else {
                (
                    Duration::from_millis(5),
                    Ok(r#"{"response": "Labels must list allergens."}"#.to_string()),
                )
            }
        });
        let service = test_service(llm.clone());

        let (analysis, chat) = tokio::join!(
            service.analyze_ingredients(AnalyzeIngredientsInput {
                ingredients: "Sugar, Salt".to_string(),
            }),
            service.fssai_query(FssaiChatInput {
                query: "allergen labelling".to_string(),
            }),
        );

        assert_eq!(
            analysis.expect("analysis").overall_summary,
            "Fine in moderation."
        );
        assert!(
            chat.expect("chat")
                .response
                .starts_with("Labels must list allergens.")
        );
        assert_eq!(llm.calls(), 2);
    }
}
