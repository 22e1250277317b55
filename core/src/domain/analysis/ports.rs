use std::future::Future;

use crate::domain::{
    analysis::{
        fssai_chat::{FssaiChatInput, FssaiChatOutput},
        guess::{GuessIngredientsInput, GuessIngredientsOutput},
        ingredients::{AnalyzeIngredientsInput, AnalyzeIngredientsOutput},
        product::{AnalyzeProductInput, AnalyzeProductOutput},
        summary::{SummarizeAnalysisInput, SummarizeAnalysisOutput},
    },
    common::entities::app_errors::CoreError,
};

/// The AI-backed operations exposed to callers. Each call is independent.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<AnalyzeIngredientsOutput, CoreError>> + Send;

    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<AnalyzeProductOutput, CoreError>> + Send;

    /// Never fails: an unusable answer yields `ingredients: None`.
    fn guess_ingredients(
        &self,
        input: GuessIngredientsInput,
    ) -> impl Future<Output = Result<GuessIngredientsOutput, CoreError>> + Send;

    fn summarize_analysis(
        &self,
        input: SummarizeAnalysisInput,
    ) -> impl Future<Output = Result<SummarizeAnalysisOutput, CoreError>> + Send;

    /// Never fails: an unusable answer yields an apology. Every answer ends with
    /// the FSSAI disclaimer.
    fn fssai_query(
        &self,
        input: FssaiChatInput,
    ) -> impl Future<Output = Result<FssaiChatOutput, CoreError>> + Send;
}
