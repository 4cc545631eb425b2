//! Multipart form encoding
//!
//! Create/update endpoints accept either a pre-built form or a plain
//! field map. The field-map encoding is a wire contract with the server
//! and must not drift: scalars become string parts, non-string JSON
//! values are serialized to JSON strings, arrays explode into
//! `key[index]` entries, and files pass through as binary parts.

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::error::{Error, Result};

/// A file destined for a binary part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// One value in a plain field map
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Json(Value),
    List(Vec<FieldValue>),
    File(FilePart),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// A field after encoding, ready to become a multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedPart {
    Text { name: String, value: String },
    File { name: String, file: FilePart },
}

/// Flatten a field map into parts, applying the wire encoding
pub fn encode_fields(fields: Vec<(String, FieldValue)>) -> Vec<EncodedPart> {
    let mut parts = Vec::new();
    for (name, value) in fields {
        encode_value(&mut parts, name, value);
    }
    parts
}

fn encode_value(parts: &mut Vec<EncodedPart>, name: String, value: FieldValue) {
    match value {
        FieldValue::Text(value) => parts.push(EncodedPart::Text { name, value }),
        // JSON strings pass through unquoted; everything else is
        // serialized exactly as the server decodes it
        FieldValue::Json(Value::String(value)) => parts.push(EncodedPart::Text { name, value }),
        FieldValue::Json(value) => parts.push(EncodedPart::Text {
            name,
            value: value.to_string(),
        }),
        FieldValue::List(items) => {
            for (index, item) in items.into_iter().enumerate() {
                encode_value(parts, format!("{}[{}]", name, index), item);
            }
        }
        FieldValue::File(file) => parts.push(EncodedPart::File { name, file }),
    }
}

/// Assemble a reqwest form from a plain field map
pub fn into_form(fields: Vec<(String, FieldValue)>) -> Result<Form> {
    let mut form = Form::new();
    for encoded in encode_fields(fields) {
        form = match encoded {
            EncodedPart::Text { name, value } => form.text(name, value),
            EncodedPart::File { name, file } => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.filename)
                    .mime_str(&file.mime)
                    .map_err(|e| Error::Form(e.to_string()))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_part(name: &str, value: &str) -> EncodedPart {
        EncodedPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_scalar_fields_pass_as_text() {
        let parts = encode_fields(vec![
            ("title".to_string(), FieldValue::text("Headline")),
            ("isVideo".to_string(), FieldValue::Json(json!(true))),
        ]);
        assert_eq!(
            parts,
            vec![text_part("title", "Headline"), text_part("isVideo", "true")]
        );
    }

    #[test]
    fn test_json_string_is_not_double_quoted() {
        let parts = encode_fields(vec![(
            "category".to_string(),
            FieldValue::Json(json!("Politics")),
        )]);
        assert_eq!(parts, vec![text_part("category", "Politics")]);
    }

    #[test]
    fn test_object_serializes_to_json_string() {
        let parts = encode_fields(vec![(
            "socials".to_string(),
            FieldValue::Json(json!({"twitter": "@ada"})),
        )]);
        assert_eq!(parts, vec![text_part("socials", r#"{"twitter":"@ada"}"#)]);
    }

    #[test]
    fn test_array_explodes_into_indexed_keys() {
        let parts = encode_fields(vec![(
            "tags".to_string(),
            FieldValue::List(vec![
                FieldValue::text("science"),
                FieldValue::text("space"),
            ]),
        )]);
        assert_eq!(
            parts,
            vec![text_part("tags[0]", "science"), text_part("tags[1]", "space")]
        );
    }

    #[test]
    fn test_array_of_objects_encodes_each_element() {
        let parts = encode_fields(vec![(
            "sections".to_string(),
            FieldValue::List(vec![FieldValue::Json(json!({"heading": "Intro"}))]),
        )]);
        assert_eq!(parts, vec![text_part("sections[0]", r#"{"heading":"Intro"}"#)]);
    }

    #[test]
    fn test_file_passes_through_untouched() {
        let file = FilePart::new("cover.jpg", "image/jpeg", vec![0xFF, 0xD8]);
        let parts = encode_fields(vec![("cover".to_string(), FieldValue::File(file.clone()))]);
        assert_eq!(
            parts,
            vec![EncodedPart::File {
                name: "cover".to_string(),
                file,
            }]
        );
    }

    #[test]
    fn test_form_assembly_accepts_all_field_kinds() {
        let fields = vec![
            ("title".to_string(), FieldValue::text("T")),
            (
                "tags".to_string(),
                FieldValue::List(vec![FieldValue::text("a")]),
            ),
            (
                "cover".to_string(),
                FieldValue::File(FilePart::new("c.png", "image/png", vec![1, 2, 3])),
            ),
        ];
        assert!(into_form(fields).is_ok());
    }

    #[test]
    fn test_form_assembly_rejects_bad_mime() {
        let fields = vec![(
            "cover".to_string(),
            FieldValue::File(FilePart::new("c.png", "not a mime type", vec![])),
        )];
        assert!(matches!(into_form(fields), Err(Error::Form(_))));
    }
}
