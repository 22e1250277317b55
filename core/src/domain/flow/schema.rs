use serde_json::{Map, Value, json};
use thiserror::Error;

/// Shape of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    StringArray,
    NullableString,
    Object(&'static [FieldDescriptor]),
    ObjectArray(&'static [FieldDescriptor]),
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::StringArray => "an array of strings",
            FieldKind::NullableString => "a string or null",
            FieldKind::Object(_) => "an object",
            FieldKind::ObjectArray(_) => "an array of objects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
    /// Text fields flagged here are rejected when blank.
    pub non_empty: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            non_empty: false,
        }
    }

    pub const fn non_empty(self) -> Self {
        Self {
            non_empty: true,
            ..self
        }
    }
}

/// Declarative description of a flow's request or response object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldDescriptor],
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("expected a JSON object at '{path}'")]
    NotAnObject { path: String },

    #[error("missing required field '{path}'")]
    MissingField { path: String },

    #[error("field '{path}' should be {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("field '{path}' must not be empty")]
    EmptyField { path: String },
}

impl Schema {
    pub const fn new(fields: &'static [FieldDescriptor]) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Machine-readable form handed to the model as its response schema.
    pub fn to_json_schema(&self) -> Value {
        object_schema(self.fields)
    }

    /// Checks that `value` structurally matches this schema. Unknown fields are ignored.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        validate_object(self.fields, value, "$")
    }
}

fn object_schema(fields: &[FieldDescriptor]) -> Value {
    let properties = fields
        .iter()
        .map(|field| (field.name.to_string(), field_schema(field)))
        .collect::<Map<String, Value>>();

    let required = fields
        .iter()
        .filter(|field| field.kind != FieldKind::NullableString)
        .map(|field| field.name)
        .collect::<Vec<&str>>();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn field_schema(field: &FieldDescriptor) -> Value {
    let mut schema = match field.kind {
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        FieldKind::NullableString => json!({ "type": "string", "nullable": true }),
        FieldKind::Object(fields) => object_schema(fields),
        FieldKind::ObjectArray(fields) => json!({ "type": "array", "items": object_schema(fields) }),
    };

    if !field.description.is_empty() {
        schema["description"] = Value::String(field.description.to_string());
    }

    schema
}

fn validate_object(
    fields: &[FieldDescriptor],
    value: &Value,
    path: &str,
) -> Result<(), SchemaViolation> {
    let object = value.as_object().ok_or_else(|| SchemaViolation::NotAnObject {
        path: path.to_string(),
    })?;

    for field in fields {
        let field_path = format!("{path}.{}", field.name);
        match object.get(field.name) {
            Some(field_value) => validate_field(field, field_value, &field_path)?,
            // an omitted nullable field is read as null
            None if field.kind == FieldKind::NullableString => {}
            None => return Err(SchemaViolation::MissingField { path: field_path }),
        }
    }

    Ok(())
}

fn validate_field(field: &FieldDescriptor, value: &Value, path: &str) -> Result<(), SchemaViolation> {
    let wrong_type = || SchemaViolation::WrongType {
        path: path.to_string(),
        expected: field.kind.expected(),
    };

    match field.kind {
        FieldKind::String => {
            let text = value.as_str().ok_or_else(wrong_type)?;
            if field.non_empty && text.trim().is_empty() {
                return Err(SchemaViolation::EmptyField {
                    path: path.to_string(),
                });
            }
        }
        FieldKind::NullableString => {
            if !(value.is_null() || value.is_string()) {
                return Err(wrong_type());
            }
        }
        FieldKind::StringArray => {
            let items = value.as_array().ok_or_else(wrong_type)?;
            if let Some(index) = items.iter().position(|item| !item.is_string()) {
                return Err(SchemaViolation::WrongType {
                    path: format!("{path}[{index}]"),
                    expected: "a string",
                });
            }
        }
        FieldKind::Object(fields) => validate_object(fields, value, path)?,
        FieldKind::ObjectArray(fields) => {
            let items = value.as_array().ok_or_else(wrong_type)?;
            for (index, item) in items.iter().enumerate() {
                validate_object(fields, item, &format!("{path}[{index}]"))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("ingredientName", FieldKind::String, "Name of the ingredient."),
        FieldDescriptor::new("risks", FieldKind::StringArray, ""),
    ];

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("summary", FieldKind::String, "Short summary.").non_empty(),
        FieldDescriptor::new("tags", FieldKind::StringArray, ""),
        FieldDescriptor::new("note", FieldKind::NullableString, ""),
        FieldDescriptor::new("details", FieldKind::ObjectArray(DETAIL_FIELDS), ""),
    ];

    const SCHEMA: Schema = Schema::new(FIELDS);

    #[test]
    fn accepts_conforming_object_and_ignores_extras() {
        let value = json!({
            "summary": "ok",
            "tags": ["a", "b"],
            "note": null,
            "details": [{ "ingredientName": "Salt", "risks": [] }],
            "extra": 42
        });

        assert_eq!(SCHEMA.validate(&value), Ok(()));
    }

    #[test]
    fn omitted_nullable_field_is_accepted() {
        let value = json!({ "summary": "ok", "tags": [], "details": [] });

        assert!(SCHEMA.validate(&value).is_ok());
    }

    #[test]
    fn reports_missing_required_field() {
        let value = json!({ "summary": "ok", "note": null, "details": [] });

        assert_eq!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::MissingField {
                path: "$.tags".to_string()
            })
        );
    }

    #[test]
    fn reports_nested_type_mismatch_with_path() {
        let value = json!({
            "summary": "ok",
            "tags": [],
            "details": [{ "ingredientName": "Salt", "risks": ["fine", 3] }]
        });

        assert_eq!(
            SCHEMA.validate(&value),
            Err(SchemaViolation::WrongType {
                path: "$.details[0].risks[1]".to_string(),
                expected: "a string"
            })
        );
    }

    #[test]
    fn rejects_blank_non_empty_text_and_non_objects() {
        let blank = json!({ "summary": "  ", "tags": [], "details": [] });
        assert!(matches!(
            SCHEMA.validate(&blank),
            Err(SchemaViolation::EmptyField { .. })
        ));

        assert!(matches!(
            SCHEMA.validate(&json!("just text")),
            Err(SchemaViolation::NotAnObject { .. })
        ));
    }

    #[test]
    fn json_schema_lists_required_fields_and_nullable_kinds() {
        let schema = SCHEMA.to_json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["summary", "tags", "details"]));
        assert_eq!(schema["properties"]["note"]["nullable"], true);
        assert_eq!(schema["properties"]["summary"]["description"], "Short summary.");
        assert_eq!(
            schema["properties"]["details"]["items"]["properties"]["risks"]["items"]["type"],
            "string"
        );
    }
}
