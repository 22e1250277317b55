use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::flow::{
    FailurePolicy, FieldDescriptor, FieldKind, FlowDefinition, PromptTemplate, Schema,
};

macro_rules! fssai_disclaimer {
    () => {
        "Please note: This information is for general guidance only. Always refer to official FSSAI notifications, its website (fssai.gov.in), or consult with a qualified food safety professional for definitive advice and the most current regulations."
    };
}

/// Closes every chat answer, verbatim.
pub const FSSAI_DISCLAIMER: &str = fssai_disclaimer!();

pub const FSSAI_APOLOGY: &str =
    "I'm sorry, I encountered an issue processing your request. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FssaiChatInput {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FssaiChatOutput {
    pub response: String,
}

impl FssaiChatOutput {
    /// Appends the disclaimer on a new line unless the answer already ends with it.
    pub fn with_disclaimer(self) -> Self {
        let trimmed = self.response.trim_end();
        if trimmed.ends_with(FSSAI_DISCLAIMER) {
            return Self {
                response: trimmed.to_string(),
            };
        }

        Self {
            response: format!("{trimmed}\n{FSSAI_DISCLAIMER}"),
        }
    }
}

const INPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "query",
    FieldKind::String,
    "The user query about FSSAI rules and regulations.",
)];

const OUTPUT_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "response",
    FieldKind::String,
    "The AI chatbot response to the user query.",
)
.non_empty()];

pub const FSSAI_CHAT_INPUT_SCHEMA: Schema = Schema::new(INPUT_FIELDS);
pub const FSSAI_CHAT_OUTPUT_SCHEMA: Schema = Schema::new(OUTPUT_FIELDS);

const TEMPLATE: &str = concat!(
    r#"You are a helpful AI assistant specialized in FSSAI (Food Safety and Standards Authority of India) rules, regulations, and food safety guidelines in India.
Your goal is to answer user questions accurately and clearly based on publicly available information about FSSAI.

When responding:
- Be polite and conversational.
- If a question is clearly outside the scope of FSSAI or food safety in India (e.g., asking about car repair, sports scores), politely state that you are specialized in FSSAI topics and cannot answer it.
- For every response you provide regarding FSSAI, **you MUST conclude** with the following disclaimer, exactly as written, on a new line:
""#,
    fssai_disclaimer!(),
    r#""

Respond with a single JSON object of the form {"response": "<your answer>"}.
Example: {"response": "FSSAI requires a license for food businesses above the registration turnover threshold.\nPlease note: ..."}

User's question: {{query}}
"#
);

fn apology() -> FssaiChatOutput {
    FssaiChatOutput {
        response: format!("{FSSAI_APOLOGY}\n\n{FSSAI_DISCLAIMER}"),
    }
}

pub const FSSAI_CHAT_FLOW: FlowDefinition<FssaiChatOutput> = FlowDefinition {
    name: "fssaiChatFlow",
    input_schema: FSSAI_CHAT_INPUT_SCHEMA,
    output_schema: FSSAI_CHAT_OUTPUT_SCHEMA,
    template: PromptTemplate::new(TEMPLATE),
    on_failure: FailurePolicy::FallbackValue(apology),
};
