use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::{
    FailurePolicy, FieldDescriptor, FieldKind, FlowDefinition, PromptTemplate, Schema,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessIngredientsInput {
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessIngredientsOutput {
    /// Comma-separated ingredients, `None` when they cannot be determined.
    pub ingredients: Option<String>,
}

const INPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "productName",
    FieldKind::String,
    "The name of the food product.",
)];

const OUTPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "ingredients",
    FieldKind::NullableString,
    "A comma-separated string of common ingredients for the product, or null if not determinable.",
)];

pub const GUESS_INGREDIENTS_INPUT_SCHEMA: Schema = Schema::new(INPUT_FIELDS);
pub const GUESS_INGREDIENTS_OUTPUT_SCHEMA: Schema = Schema::new(OUTPUT_FIELDS);

const TEMPLATE: &str = r#"Given the product name: {{productName}}

List the common ingredients typically found in this type of product as a single, comma-separated string.
For example, if the product is "Chocolate Chip Cookies", a possible output is "Flour, Sugar, Butter, Chocolate Chips, Eggs, Vanilla Extract, Baking Soda, Salt".
Example output: {"ingredients": "Flour, Sugar, Butter, Chocolate Chips, Eggs, Vanilla Extract, Baking Soda, Salt"}

If you cannot reasonably determine common ingredients for this product, return null for the ingredients field.
Ensure your output is a JSON object matching the defined schema.
"#;

fn no_ingredients() -> GuessIngredientsOutput {
    GuessIngredientsOutput { ingredients: None }
}

pub const GUESS_INGREDIENTS_FLOW: FlowDefinition<GuessIngredientsOutput> = FlowDefinition {
    name: "guessIngredientsFlow",
    input_schema: GUESS_INGREDIENTS_INPUT_SCHEMA,
    output_schema: GUESS_INGREDIENTS_OUTPUT_SCHEMA,
    template: PromptTemplate::new(TEMPLATE),
    on_failure: FailurePolicy::FallbackValue(no_ingredients),
};
