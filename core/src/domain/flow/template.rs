use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};
use serde_json::Value;

use crate::domain::flow::schema::{FieldKind, Schema};

/// Rendered in place of a text field the request did not provide.
pub const NONE_PROVIDED: &str = "None provided.";

/// Rendered in place of an empty or missing list field.
pub const NONE_LISTED: &str = "None listed.";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Field name to already-rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, rendered: impl Into<String>) {
        self.values.insert(name.into(), rendered.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Renders every field declared by `schema` from a serialized request.
    pub fn from_request(schema: &Schema, request: &Value) -> Self {
        let mut context = Self::new();
        for field in schema.fields {
            context.insert(field.name, render_field(field.kind, request.get(field.name)));
        }
        context
    }
}

/// Prompt text with `{{field}}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    source: &'static str,
}

impl PromptTemplate {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.source)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// Substitutes every placeholder. Names missing from `context` render as
    /// [`NONE_PROVIDED`], never as the raw placeholder.
    pub fn render(&self, context: &TemplateContext) -> String {
        PLACEHOLDER
            .replace_all(self.source, |caps: &Captures| {
                context.get(&caps[1]).unwrap_or(NONE_PROVIDED).to_string()
            })
            .into_owned()
    }
}

pub fn render_field(kind: FieldKind, value: Option<&Value>) -> String {
    match (kind, value) {
        (FieldKind::StringArray | FieldKind::ObjectArray(_), None | Some(Value::Null)) => {
            NONE_LISTED.to_string()
        }
        (_, None | Some(Value::Null)) => NONE_PROVIDED.to_string(),
        (FieldKind::StringArray | FieldKind::ObjectArray(_), Some(Value::Array(items))) => {
            bullet_list(items.iter().map(value_text))
        }
        (_, Some(value)) => value_text(value),
    }
}

/// One `- item` line per entry, or [`NONE_LISTED`] when there are none.
pub fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<String>>();

    if lines.is_empty() {
        NONE_LISTED.to_string()
    } else {
        lines.join("\n")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::flow::schema::FieldDescriptor;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("intro", FieldKind::String, ""),
        FieldDescriptor::new("effects", FieldKind::StringArray, ""),
    ];

    const SCHEMA: Schema = Schema::new(FIELDS);

    #[test]
    fn substitutes_placeholders_and_keeps_json_braces() {
        let template = PromptTemplate::new("Intro: {{ intro }}\nExample: {\"a\": [1]}\n{{effects}}");
        let context = TemplateContext::from_request(
            &SCHEMA,
            &json!({ "intro": "Hello", "effects": ["One", "Two"] }),
        );

        assert_eq!(
            template.render(&context),
            "Intro: Hello\nExample: {\"a\": [1]}\n- One\n- Two"
        );
    }

    #[test]
    fn empty_and_missing_fields_render_markers() {
        let template = PromptTemplate::new("{{intro}} | {{effects}} | {{unknown}}");

        let empty = TemplateContext::from_request(&SCHEMA, &json!({ "intro": "", "effects": [] }));
        assert_eq!(template.render(&empty), " | None listed. | None provided.");

        let missing = TemplateContext::from_request(&SCHEMA, &json!({}));
        assert_eq!(
            template.render(&missing),
            "None provided. | None listed. | None provided."
        );
    }

    #[test]
    fn lists_placeholders_in_order() {
        let template = PromptTemplate::new("{{a}} then {{ b }} then {{a}}");

        assert_eq!(template.placeholders(), vec!["a", "b", "a"]);
    }

    #[test]
    fn bullet_list_of_nothing_is_marker() {
        assert_eq!(bullet_list(Vec::<String>::new()), NONE_LISTED);
        assert_eq!(bullet_list(["x"]), "- x");
    }
}
