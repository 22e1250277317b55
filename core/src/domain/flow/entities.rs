use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    flow::{
        schema::{Schema, SchemaViolation},
        template::{PromptTemplate, TemplateContext},
    },
};

/// What a flow does when the model gives nothing usable.
#[derive(Debug, Clone, Copy)]
pub enum FailurePolicy<O> {
    RaiseOnFailure { message: &'static str },
    FallbackValue(fn() -> O),
}

impl<O> FailurePolicy<O> {
    pub fn resolve(&self, flow: &str) -> Result<O, CoreError> {
        match self {
            FailurePolicy::RaiseOnFailure { message } => Err(CoreError::FlowExecution {
                flow: flow.to_string(),
                message: message.to_string(),
            }),
            FailurePolicy::FallbackValue(fallback) => Ok(fallback()),
        }
    }
}

/// Why a single flow invocation could not produce a validated object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowFailure {
    #[error("generative backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("model response does not match the output schema: {0}")]
    SchemaMismatch(#[from] SchemaViolation),

    #[error("model response could not be converted to the output type: {0}")]
    Conversion(String),
}

#[derive(Debug, Clone, Copy)]
pub struct FlowDefinition<O> {
    /// Used for diagnostics only.
    pub name: &'static str,
    pub input_schema: Schema,
    pub output_schema: Schema,
    pub template: PromptTemplate,
    pub on_failure: FailurePolicy<O>,
}

impl<O> FlowDefinition<O> {
    /// Renders the prompt for `request`. Fields the request lacks are rendered
    /// as markers instead of failing.
    pub fn render_prompt<I>(&self, request: &I) -> String
    where
        I: Serialize + ?Sized,
    {
        let fields = serde_json::to_value(request).unwrap_or_else(|e| {
            warn!(flow = self.name, error = %e, "request could not be serialized, rendering without fields");
            Value::Null
        });

        let context = TemplateContext::from_request(&self.input_schema, &fields);
        self.template.render(&context)
    }
}

impl<O> FlowDefinition<O>
where
    O: DeserializeOwned,
{
    /// Coerces raw model text into the typed output, validating it against
    /// `output_schema` first.
    pub fn parse_output(&self, raw: &str) -> Result<O, FlowFailure> {
        let payload = strip_code_fence(raw.trim());
        if payload.is_empty() {
            return Err(FlowFailure::EmptyResponse);
        }

        let value: Value = serde_json::from_str(payload)
            .map_err(|e| FlowFailure::MalformedJson(e.to_string()))?;
        if value.is_null() {
            return Err(FlowFailure::EmptyResponse);
        }

        self.output_schema.validate(&value)?;

        serde_json::from_value(value).map_err(|e| FlowFailure::Conversion(e.to_string()))
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    // drop the info string ("json") that may follow the opening fence
    let body = match rest.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with(['{', '[']) => body,
        _ => {
            let inline = rest.trim_start();
            inline.strip_prefix("json").unwrap_or(inline)
        }
    };

    body.trim()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::domain::flow::schema::{FieldDescriptor, FieldKind};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Answer {
        response: String,
    }

    const FIELDS: &[FieldDescriptor] =
        &[FieldDescriptor::new("response", FieldKind::String, "").non_empty()];

    fn fallback() -> Answer {
        Answer {
            response: "sorry".to_string(),
        }
    }

    const FLOW: FlowDefinition<Answer> = FlowDefinition {
        name: "answerFlow",
        input_schema: Schema::new(FIELDS),
        output_schema: Schema::new(FIELDS),
        template: PromptTemplate::new("Q: {{response}}"),
        on_failure: FailurePolicy::FallbackValue(fallback),
    };

    #[test]
    fn parses_fenced_json() {
        let raw = "```json\n{\"response\": \"hi\"}\n```";

        assert_eq!(
            FLOW.parse_output(raw),
            Ok(Answer {
                response: "hi".to_string()
            })
        );
    }

    #[test]
    fn parses_single_line_fenced_json() {
        for raw in [
            "```{\"response\": \"hi\"}```",
            "```json {\"response\": \"hi\"}```",
        ] {
            assert_eq!(
                FLOW.parse_output(raw),
                Ok(Answer {
                    response: "hi".to_string()
                }),
                "{raw}"
            );
        }
    }

    #[test]
    fn classifies_unusable_output() {
        assert_eq!(FLOW.parse_output("   "), Err(FlowFailure::EmptyResponse));
        assert_eq!(FLOW.parse_output("null"), Err(FlowFailure::EmptyResponse));
        assert!(matches!(
            FLOW.parse_output("Sure! Here you go"),
            Err(FlowFailure::MalformedJson(_))
        ));
        assert!(matches!(
            FLOW.parse_output("{\"answer\": \"hi\"}"),
            Err(FlowFailure::SchemaMismatch(SchemaViolation::MissingField { .. }))
        ));
        assert!(matches!(
            FLOW.parse_output("{\"response\": \"\"}"),
            Err(FlowFailure::SchemaMismatch(SchemaViolation::EmptyField { .. }))
        ));
    }

    #[test]
    fn policy_resolves_to_fallback_or_error() {
        assert_eq!(FLOW.on_failure.resolve("answerFlow"), Ok(fallback()));

        let raise: FailurePolicy<Answer> = FailurePolicy::RaiseOnFailure {
            message: "boom.",
        };
        assert_eq!(
            raise.resolve("answerFlow"),
            Err(CoreError::FlowExecution {
                flow: "answerFlow".to_string(),
                message: "boom.".to_string()
            })
        );
    }
}
