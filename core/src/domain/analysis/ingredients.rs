use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::{
    FailurePolicy, FieldDescriptor, FieldKind, FlowDefinition, PromptTemplate, Schema,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsInput {
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIngredientsOutput {
    pub introduction: String,
    pub harmful_effects: Vec<String>,
    pub fssai_limits: String,
    pub common_products: Vec<String>,
    pub overall_summary: String,
}

const INPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "ingredients",
    FieldKind::String,
    "A list of ingredients to analyze, separated by commas or new lines.",
)];

const OUTPUT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "introduction",
        FieldKind::String,
        "A brief introduction to the analysis of the ingredients.",
    ),
    FieldDescriptor::new(
        "harmfulEffects",
        FieldKind::StringArray,
        "A pointwise list of potential harmful effects of the identified ingredients. Each point should be a separate string in the array.",
    ),
    FieldDescriptor::new(
        "fssaiLimits",
        FieldKind::String,
        "Information on FSSAI (Food Safety and Standards Authority of India) maximum permissible limits for the ingredients, if available. State if not found or not applicable.",
    ),
    FieldDescriptor::new(
        "commonProducts",
        FieldKind::StringArray,
        "A list of approximately 5 common daily used products that may contain one or more of the analyzed ingredients. Each product should be a separate string in the array.",
    ),
    FieldDescriptor::new(
        "overallSummary",
        FieldKind::String,
        "A concluding summary of the ingredient analysis.",
    ),
];

pub const ANALYZE_INGREDIENTS_INPUT_SCHEMA: Schema = Schema::new(INPUT_FIELDS);
pub const ANALYZE_INGREDIENTS_OUTPUT_SCHEMA: Schema = Schema::new(OUTPUT_FIELDS);

const TEMPLATE: &str = r#"You are an expert in health, nutrition, and food safety. Please analyze the following list of ingredients:
{{ingredients}}

Provide your analysis in a structured format. Your response MUST conform to the output schema.

Specifically, cover the following points:
1.  **Introduction**: Start with a brief introduction to your analysis of the provided ingredients.
2.  **Harmful Effects**: Identify any potentially unhealthy or concerning ingredients. For each, provide a pointwise list of their potential harmful effects. This should be an array of strings.
3.  **FSSAI Limits**: Discuss any relevant FSSAI (Food Safety and Standards Authority of India) guidelines or maximum permissible limits for these ingredients, if such information is publicly available and applicable. If specific FSSAI limits are not found for an ingredient, or if they are not applicable (e.g., for a whole food like 'apple'), clearly state that. This should be a descriptive string.
4.  **Common Products**: List approximately 5 common, daily-used food products that typically contain one or more of the analyzed (especially the concerning) ingredients. This should be an array of strings.
5.  **Overall Summary**: Conclude with an overall summary of your findings and any general advice.

Example for harmfulEffects: ["Causes digestive issues in sensitive individuals.", "May contribute to high blood pressure if consumed in excess."]
Example for commonProducts: ["Instant noodles", "Processed cheese slices", "Soft drinks", "Packaged biscuits", "Breakfast cereals"]

Ensure your entire response is a single JSON object matching the defined output schema.
"#;

pub const ANALYZE_INGREDIENTS_FLOW: FlowDefinition<AnalyzeIngredientsOutput> = FlowDefinition {
    name: "analyzeIngredientsFlow",
    input_schema: ANALYZE_INGREDIENTS_INPUT_SCHEMA,
    output_schema: ANALYZE_INGREDIENTS_OUTPUT_SCHEMA,
    template: PromptTemplate::new(TEMPLATE),
    on_failure: FailurePolicy::RaiseOnFailure {
        message: "AI analysis failed to produce structured output.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_ingredients_in_place_of_placeholder() {
        let prompt = ANALYZE_INGREDIENTS_FLOW.render_prompt(&AnalyzeIngredientsInput {
            ingredients: "Sugar, Salt".to_string(),
        });

        assert!(prompt.contains("Please analyze the following list of ingredients:\nSugar, Salt\n"));
        assert!(!prompt.contains("{{ingredients}}"));
        assert!(prompt.contains("single JSON object"));
    }

    #[test]
    fn output_uses_camel_case_field_names() {
        let output: AnalyzeIngredientsOutput = ANALYZE_INGREDIENTS_FLOW
            .parse_output(
                r#"{
                    "introduction": "Two common ingredients.",
                    "harmfulEffects": ["Raises blood pressure."],
                    "fssaiLimits": "No specific limits.",
                    "commonProducts": ["Chips"],
                    "overallSummary": "Use in moderation."
                }"#,
            )
            .expect("valid analysis");

        assert_eq!(output.harmful_effects, vec!["Raises blood pressure."]);
        assert_eq!(output.common_products, vec!["Chips"]);
    }
}
