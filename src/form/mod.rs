// src/form/mod.rs
use std::collections::HashMap;
use serde_json::{Map, Value};

use crate::config::{FieldKind, FormSchema};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Page-specific wording, e.g. "Please enter at least one symptom".
    #[error("{0}")]
    Required(&'static str),
    #[error("Please fill in all fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Raw string values of one page's form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<String, String>,
}

impl FormState {
    pub fn for_schema(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn validate(&self, schema: &FormSchema) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = schema
            .fields
            .iter()
            .filter(|field| match field.kind {
                FieldKind::List => split_list(self.get(field.name)).is_empty(),
                _ => self.get(field.name).trim().is_empty(),
            })
            .map(|field| field.label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else if let Some(message) = schema.required_message {
            Err(ValidationError::Required(message))
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// JSON body for the schema's endpoint. Values go out exactly as entered.
    pub fn to_payload(&self, schema: &FormSchema) -> Value {
        let mut body = Map::new();
        for field in schema.fields {
            let raw = self.get(field.name);
            let value = match field.kind {
                FieldKind::List => Value::from(split_list(raw)),
                FieldKind::Number | FieldKind::Choice(_) => Value::from(raw),
            };
            body.insert(field.name.to_string(), value);
        }
        Value::Object(body)
    }
}

/// Splits comma-separated input into trimmed, non-empty entries, keeping order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Appends `entry` to a comma-separated list unless it is already present.
pub fn append_to_list(raw: &mut String, entry: &str) {
    if split_list(raw).iter().any(|existing| existing == entry) {
        return;
    }
    let trimmed_len = raw.trim_end().trim_end_matches(',').trim_end().len();
    raw.truncate(trimmed_len);
    if !raw.is_empty() {
        raw.push_str(", ");
    }
    raw.push_str(entry);
}
