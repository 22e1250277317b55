use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::{
    FailurePolicy, FieldDescriptor, FieldKind, FlowDefinition, PromptTemplate, Schema,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProductInput {
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDetail {
    pub ingredient_name: String,
    pub benefits: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProductOutput {
    pub product_name: String,
    pub introduction: String,
    pub guessed_ingredients: Vec<String>,
    pub ingredient_analysis: Vec<IngredientDetail>,
    pub overall_considerations: String,
}

const INPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "productName",
    FieldKind::String,
    "The name of the food product to analyze (e.g., \"Chocolate Chip Cookies\", \"Instant Ramen Noodles\").",
)];

const INGREDIENT_DETAIL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("ingredientName", FieldKind::String, "Name of the ingredient."),
    FieldDescriptor::new(
        "benefits",
        FieldKind::StringArray,
        "Pointwise list of potential health benefits of this ingredient. State if none or not applicable. Be concise.",
    ),
    FieldDescriptor::new(
        "risks",
        FieldKind::StringArray,
        "Pointwise list of potential health risks or harmfulness of this ingredient. State if none or not applicable. Be concise.",
    ),
];

const OUTPUT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "productName",
        FieldKind::String,
        "The name of the product that was analyzed.",
    ),
    FieldDescriptor::new(
        "introduction",
        FieldKind::String,
        "A brief introduction about the analysis of the product and its typical ingredients.",
    ),
    FieldDescriptor::new(
        "guessedIngredients",
        FieldKind::StringArray,
        "A list of common ingredients typically found in this type of product. This is a best-effort guess as exact formulations vary by brand and specific product.",
    ),
    FieldDescriptor::new(
        "ingredientAnalysis",
        FieldKind::ObjectArray(INGREDIENT_DETAIL_FIELDS),
        "Detailed analysis for each guessed ingredient, including its benefits and risks.",
    ),
    FieldDescriptor::new(
        "overallConsiderations",
        FieldKind::String,
        "General advice or considerations about consuming this type of product, based on its common ingredients. Include a disclaimer that actual ingredients can vary by brand, specific product, and that this is not medical advice.",
    ),
];

pub const ANALYZE_PRODUCT_INPUT_SCHEMA: Schema = Schema::new(INPUT_FIELDS);
pub const ANALYZE_PRODUCT_OUTPUT_SCHEMA: Schema = Schema::new(OUTPUT_FIELDS);

const TEMPLATE: &str = r#"You are an expert in food science, nutrition, and consumer products.
The user will provide a product name: {{productName}}

Your task is to:
1.  **Introduction**: Write a brief introduction about the kind of product it is and that you will be analyzing its common ingredients.
2.  **Guess Ingredients**: Based on the product name, list common ingredients typically found in such a product. Acknowledge that this is a general list and specific brands may differ. Aim for a reasonable number of key ingredients (e.g., 5-10).
3.  **Analyze Each Ingredient**: For each ingredient you've listed:
    *   Provide a pointwise list of its potential health benefits. If none or not applicable for a common food item, state that.
    *   Provide a pointwise list of its potential health risks or harmfulness. If none or not applicable, state that. Be factual and balanced.
4.  **Overall Considerations**: Provide some general considerations or advice about consuming this type of product. Crucially, include a disclaimer stating that:
    *   The ingredient list is a general guess and actual ingredients can vary significantly by brand and specific product.
    *   This analysis is for informational purposes only and not medical advice.
    *   Users should always check the product's label for actual ingredients and consult with a healthcare professional for health advice.

Ensure your entire response is a single JSON object matching the defined output schema.

Example for an ingredient in ingredientAnalysis:
{
  "ingredientName": "High Fructose Corn Syrup",
  "benefits": ["Provides energy quickly.", "Can improve texture and stability in some products."],
  "risks": ["Excessive consumption linked to weight gain.", "May contribute to insulin resistance.", "Can increase risk of type 2 diabetes and fatty liver disease if overconsumed."]
}

Product to analyze: {{productName}}
"#;

pub const ANALYZE_PRODUCT_FLOW: FlowDefinition<AnalyzeProductOutput> = FlowDefinition {
    name: "analyzeProductFlow",
    input_schema: ANALYZE_PRODUCT_INPUT_SCHEMA,
    output_schema: ANALYZE_PRODUCT_OUTPUT_SCHEMA,
    template: PromptTemplate::new(TEMPLATE),
    on_failure: FailurePolicy::RaiseOnFailure {
        message: "AI product analysis failed to produce structured output.",
    },
};
