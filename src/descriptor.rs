use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Discriminant selecting which interactive control a descriptor renders as.
///
/// Exactly one component is active per descriptor; unrecognized tags land in
/// `Unknown` and render as a diagnostic placeholder instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Password,
    Textarea,
    Checkbox,
    Select { options: Vec<String>, multiple: bool },
    Radio { options: Vec<String> },
    Timezone { options: Vec<String> },
    Upload,
    DateTime,
    Color,
    Unknown(String),
}

impl FieldKind {
    /// Maps the wire-level kind tags onto variants. `options` and `multiple`
    /// only matter for the choice-bearing kinds and are ignored elsewhere.
    pub fn from_tag(tag: &str, options: Vec<String>, multiple: bool) -> Self {
        match tag {
            "text" | "string" => FieldKind::Text,
            "password" => FieldKind::Password,
            "textarea" => FieldKind::Textarea,
            "checkbox" | "bool" => FieldKind::Checkbox,
            "select" => FieldKind::Select { options, multiple },
            "radio" => FieldKind::Radio { options },
            "timezone" => FieldKind::Timezone { options },
            "upload" => FieldKind::Upload,
            "datetime" => FieldKind::DateTime,
            "color" => FieldKind::Color,
            other => FieldKind::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Textarea => "textarea",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Timezone { .. } => "timezone",
            FieldKind::Upload => "upload",
            FieldKind::DateTime => "datetime",
            FieldKind::Color => "color",
            FieldKind::Unknown(raw) => raw,
        }
    }
}

/// Declarative record describing one form input.
///
/// Descriptors are transient: the caller supplies a fresh one on every
/// render. The only state the library retains lives inside the bound
/// component (uncontrolled buffers and the date/time shadow value).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<Value>,
    pub default_value: Option<Value>,
    pub disabled: bool,
    pub error: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            helper_text: None,
            placeholder: None,
            value: None,
            default_value: None,
            disabled: false,
            error: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// The accessible name shown beside or above the control.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Submission key. Multi-selects submit under `name[]` so a downstream
    /// serializer can reconstruct the collection.
    pub fn submission_name(&self) -> String {
        match &self.kind {
            FieldKind::Select { multiple: true, .. } => format!("{}[]", self.name),
            _ => self.name.clone(),
        }
    }

    /// Controlled value first, uncontrolled seed second.
    pub fn seed_value(&self) -> Option<&Value> {
        self.value.as_ref().or(self.default_value.as_ref())
    }
}

/// One option-list entry in the shape the list widget emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    /// Plain option strings double as both label and value.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = label.clone();
        Self { label, value }
    }

    pub fn to_value(&self) -> Value {
        json!({ "label": self.label, "value": self.value })
    }
}

/// Raw file payload handed to the upload handler, never to `on_change`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub path: PathBuf,
    pub file_name: String,
}

impl UploadPayload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, file_name }
    }
}

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_covers_aliases() {
        assert_eq!(FieldKind::from_tag("string", Vec::new(), false), FieldKind::Text);
        assert_eq!(FieldKind::from_tag("bool", Vec::new(), false), FieldKind::Checkbox);
        assert_eq!(
            FieldKind::from_tag("select", vec!["a".to_string()], true),
            FieldKind::Select {
                options: vec!["a".to_string()],
                multiple: true,
            }
        );
    }

    #[test]
    fn from_tag_preserves_unrecognized_tags() {
        let kind = FieldKind::from_tag("unknown-xyz", Vec::new(), false);
        assert_eq!(kind, FieldKind::Unknown("unknown-xyz".to_string()));
        assert_eq!(kind.tag(), "unknown-xyz");
    }

    #[test]
    fn submission_name_marks_multi_selects() {
        let multi = FieldDescriptor::new(
            "tags",
            FieldKind::Select {
                options: vec!["a".to_string()],
                multiple: true,
            },
        );
        assert_eq!(multi.submission_name(), "tags[]");

        let single = FieldDescriptor::new(
            "tag",
            FieldKind::Select {
                options: vec!["a".to_string()],
                multiple: false,
            },
        );
        assert_eq!(single.submission_name(), "tag");
    }

    #[test]
    fn seed_value_prefers_controlled_value() {
        let descriptor = FieldDescriptor::new("title", FieldKind::Text)
            .with_value(Value::String("live".to_string()))
            .with_default_value(Value::String("seed".to_string()));
        assert_eq!(descriptor.seed_value(), Some(&Value::String("live".to_string())));
    }
}
