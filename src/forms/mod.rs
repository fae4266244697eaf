//! Schema-driven registration form engine.
//!
//! One generic engine serves all three registration kinds (spirits,
//! liqueur, ingredient). An entity is described by a static slice of
//! [`FieldSchema`] entries; the [`Draft`] owns the current field values
//! and their validation state, and assembles the multipart payload that
//! is forwarded to the backend.

pub mod csvlist;
pub mod image;
pub mod multiselect;
pub mod schema;
pub mod validate;

use crate::api::metadata::MetadataCategory;
use image::UploadedImage;

/// Current value of one form field.
#[derive(Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
    Image(Option<UploadedImage>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&UploadedImage> {
        match self {
            FieldValue::Image(img) => img.as_ref(),
            _ => None,
        }
    }
}

/// Value kind of a field; also determines its declared default
/// (empty string, zero, empty list, no file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    List,
    Image,
}

impl FieldKind {
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::List => FieldValue::List(Vec::new()),
            FieldKind::Image => FieldValue::Image(None),
        }
    }
}

/// How a field is written into the multipart submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Appended as its string form.
    Scalar,
    /// List appended as one JSON-encoded array string.
    JsonList,
    /// Like `JsonList`, but omitted entirely when the list is empty.
    JsonListIfNonEmpty,
    /// Binary part, present only when a file was selected.
    ImagePart,
    /// Declared on the draft but never submitted.
    Omitted,
}

/// Input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text,
    Number,
    TextArea,
    /// Free-text input parsed as a comma-separated list.
    Csv,
    /// Checkbox group over a remote-loaded option catalog.
    Checkboxes,
    Image,
    /// Declared but not rendered.
    Hidden,
}

/// Field-local pure validator: `None` means the value is acceptable.
pub type Validator = fn(&FieldValue) -> Option<String>;

/// Static description of one field of a registration form.
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub widget: Widget,
    pub wire: WireFormat,
    /// Metadata catalog backing a checkbox group, if any.
    pub options: Option<MetadataCategory>,
    pub validator: Validator,
}

/// Validation state of one field.
#[derive(Debug, Clone, Default)]
pub struct FieldMeta {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub is_touched: bool,
    pub is_dirty: bool,
}

/// A named value plus its validation state. Owned by the parent [`Draft`]
/// and mutated only through `handle_change` / `handle_blur`.
#[derive(Debug)]
pub struct FormField {
    pub name: &'static str,
    pub value: FieldValue,
    pub meta: FieldMeta,
    /// Raw text of a numeric input that did not parse, kept so the
    /// re-rendered form shows what the user typed instead of `0`.
    pub raw_input: Option<String>,
}

/// One piece of the multipart submission payload.
#[derive(Debug, PartialEq)]
pub enum PayloadPart<'a> {
    Text { name: &'static str, value: String },
    File { name: &'static str, image: &'a UploadedImage },
}

/// An in-progress registration: field values for one entity kind, created
/// with default values and either reset or discarded — never persisted.
pub struct Draft {
    schema: &'static [FieldSchema],
    fields: Vec<FormField>,
}

impl Draft {
    pub fn new(schema: &'static [FieldSchema]) -> Self {
        let fields = schema
            .iter()
            .map(|s| {
                let value = s.kind.default_value();
                let meta = FieldMeta {
                    is_valid: (s.validator)(&value).is_none(),
                    ..FieldMeta::default()
                };
                FormField { name: s.name, value, meta, raw_input: None }
            })
            .collect();
        Self { schema, fields }
    }

    pub fn schema(&self) -> &'static [FieldSchema] {
        self.schema
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate schema entries zipped with their current field state.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSchema, &FormField)> {
        self.schema.iter().zip(self.fields.iter())
    }

    /// Set a field's value and re-run its validator. Unknown names are
    /// ignored (the schemas are static, so a miss is a programming error).
    pub fn handle_change(&mut self, name: &str, value: FieldValue) {
        let Some(idx) = self.fields.iter().position(|f| f.name == name) else {
            log::error!("handle_change on unknown field '{name}'");
            return;
        };
        let field = &mut self.fields[idx];
        field.value = value;
        field.raw_input = None;
        field.meta.is_dirty = true;
        match (self.schema[idx].validator)(&field.value) {
            Some(msg) => {
                field.meta.is_valid = false;
                field.meta.errors = vec![msg];
            }
            None => {
                field.meta.is_valid = true;
                field.meta.errors.clear();
            }
        }
    }

    /// Set a numeric field from its submitted text. Unparseable input
    /// becomes `0.0` (and so fails the positive-number validators), but
    /// the raw text is retained for redisplay.
    pub fn handle_number_input(&mut self, name: &str, raw: &str) {
        let trimmed = raw.trim();
        let parsed = trimmed.parse::<f64>();
        let value = parsed.as_ref().copied().unwrap_or(0.0);
        self.handle_change(name, FieldValue::Number(value));
        if parsed.is_err() && !trimmed.is_empty() {
            if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
                field.raw_input = Some(raw.to_string());
            }
        }
    }

    pub fn handle_blur(&mut self, name: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.meta.is_touched = true;
        }
    }

    /// Record a constraint violation without changing the field's value,
    /// e.g. an image rejected at selection time.
    pub fn reject(&mut self, name: &str, message: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.meta.is_valid = false;
            field.meta.errors.push(message.into());
        }
    }

    /// True iff every declared validator accepts the current values.
    pub fn can_submit(&self) -> bool {
        self.entries()
            .all(|(schema, field)| (schema.validator)(&field.value).is_none())
    }

    /// Restore every field to its declared default. Idempotent:
    /// resetting twice leaves the same state as resetting once.
    pub fn reset(&mut self) {
        for (schema, field) in self.schema.iter().zip(self.fields.iter_mut()) {
            let value = schema.kind.default_value();
            field.meta = FieldMeta {
                is_valid: (schema.validator)(&value).is_none(),
                ..FieldMeta::default()
            };
            field.value = value;
            field.raw_input = None;
        }
    }

    /// Assemble the multipart payload: scalars as strings, lists as
    /// JSON-encoded array strings, images as binary parts when present.
    pub fn payload_parts(&self) -> Vec<PayloadPart<'_>> {
        let mut parts = Vec::with_capacity(self.fields.len());
        for (schema, field) in self.entries() {
            match schema.wire {
                WireFormat::Scalar => {
                    let value = match &field.value {
                        FieldValue::Text(s) => s.clone(),
                        FieldValue::Number(n) => n.to_string(),
                        FieldValue::List(v) => csvlist::format(v),
                        FieldValue::Image(_) => continue,
                    };
                    parts.push(PayloadPart::Text { name: schema.name, value });
                }
                WireFormat::JsonList => {
                    let list = field.value.as_list().unwrap_or(&[]);
                    let value = serde_json::to_string(list).unwrap_or_default();
                    parts.push(PayloadPart::Text { name: schema.name, value });
                }
                WireFormat::JsonListIfNonEmpty => {
                    let list = field.value.as_list().unwrap_or(&[]);
                    if !list.is_empty() {
                        let value = serde_json::to_string(list).unwrap_or_default();
                        parts.push(PayloadPart::Text { name: schema.name, value });
                    }
                }
                WireFormat::ImagePart => {
                    if let Some(image) = field.value.as_image() {
                        parts.push(PayloadPart::File { name: schema.name, image });
                    }
                }
                WireFormat::Omitted => {}
            }
        }
        parts
    }
}
