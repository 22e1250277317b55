use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    analysis::ingredients::AnalyzeIngredientsOutput,
    flow::{FailurePolicy, FieldDescriptor, FieldKind, FlowDefinition, PromptTemplate, Schema},
};

/// Same shape as [`AnalyzeIngredientsOutput`], declared separately so every field
/// can default when a caller only has part of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizeAnalysisInput {
    pub introduction: String,
    pub harmful_effects: Vec<String>,
    pub fssai_limits: String,
    pub common_products: Vec<String>,
    pub overall_summary: String,
}

impl From<AnalyzeIngredientsOutput> for SummarizeAnalysisInput {
    fn from(analysis: AnalyzeIngredientsOutput) -> Self {
        Self {
            introduction: analysis.introduction,
            harmful_effects: analysis.harmful_effects,
            fssai_limits: analysis.fssai_limits,
            common_products: analysis.common_products,
            overall_summary: analysis.overall_summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeAnalysisOutput {
    pub concise_summary_points: Vec<String>,
}

const INPUT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "introduction",
        FieldKind::String,
        "The introduction from the detailed analysis.",
    ),
    FieldDescriptor::new(
        "harmfulEffects",
        FieldKind::StringArray,
        "The list of harmful effects from the detailed analysis.",
    ),
    FieldDescriptor::new(
        "fssaiLimits",
        FieldKind::String,
        "The FSSAI limits information from the detailed analysis.",
    ),
    FieldDescriptor::new(
        "commonProducts",
        FieldKind::StringArray,
        "The list of common products from the detailed analysis.",
    ),
    FieldDescriptor::new(
        "overallSummary",
        FieldKind::String,
        "The overall summary from the detailed analysis.",
    ),
];

const OUTPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "conciseSummaryPoints",
    FieldKind::StringArray,
    "A concise, point-by-point summary of the ingredient analysis, highlighting the most critical information. Each point should be a separate string in the array.",
)];

pub const SUMMARIZE_ANALYSIS_INPUT_SCHEMA: Schema = Schema::new(INPUT_FIELDS);
pub const SUMMARIZE_ANALYSIS_OUTPUT_SCHEMA: Schema = Schema::new(OUTPUT_FIELDS);

const TEMPLATE: &str = r#"You are an expert summarizer. You will receive a detailed analysis of food ingredients. Your task is to condense this analysis into a concise, point-by-point summary. Focus on the most critical health implications, significant FSSAI warnings (if any were noted), and key takeaways. Make the points easy to understand quickly.

Here is the detailed analysis to summarize:
Introduction: {{introduction}}
Harmful Effects:
{{harmfulEffects}}
FSSAI Limits: {{fssaiLimits}}
Common Products:
{{commonProducts}}
Overall Summary: {{overallSummary}}

Provide your summary as an array of strings, where each string is a single summary point. Each point should be impactful and brief.
Example output: {"conciseSummaryPoints": ["High sugar content may lead to health issues.", "Contains MSG, which can cause reactions in sensitive individuals.", "FSSAI advises caution with artificial sweeteners found."]}

Ensure your entire response is a single JSON object matching the defined output schema.
"#;

pub const SUMMARIZE_ANALYSIS_FLOW: FlowDefinition<SummarizeAnalysisOutput> = FlowDefinition {
    name: "summarizeAnalysisFlow",
    input_schema: SUMMARIZE_ANALYSIS_INPUT_SCHEMA,
    output_schema: SUMMARIZE_ANALYSIS_OUTPUT_SCHEMA,
    template: PromptTemplate::new(TEMPLATE),
    on_failure: FailurePolicy::RaiseOnFailure {
        message: "AI summarization failed to produce structured output.",
    },
};
