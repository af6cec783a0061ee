//! Plain-text extraction from Day One's rich text payloads.
//!
//! Entries carry an encoded rich text column whose JSON shape has changed
//! across app versions, plus a markdown column that is used when the JSON
//! cannot be understood. Decoding never fails: anything unrecognised
//! degrades to the markdown text, or to an empty string.

use serde_json::Value;

/// A recognizer inspects decoded JSON and returns the text it carries,
/// or `None` if the payload is not its shape.
type ShapeRecognizer = fn(&Value) -> Option<String>;

/// Known payload shapes, in priority order. The first match wins.
const RECOGNIZERS: &[(&str, ShapeRecognizer)] = &[
    ("text", direct_text),
    ("attributedString", attributed_string),
    ("ops", quill_ops),
    ("delta", delta_ops),
    ("NSString", ns_string),
    ("string", bare_string),
];

/// Extract plain text from an entry's rich text JSON, falling back to markdown.
///
/// The result is trimmed. Missing or empty inputs produce an empty string.
pub fn extract_text(encoded: Option<&str>, markdown_fallback: Option<&str>) -> String {
    let extracted = encoded
        .filter(|payload| !payload.trim().is_empty())
        .and_then(|payload| serde_json::from_str::<Value>(payload).ok())
        .and_then(|value| recognize(&value));

    match extracted {
        Some(text) => text.trim().to_string(),
        None => markdown_fallback
            .map(|markdown| markdown.trim().to_string())
            .unwrap_or_default(),
    }
}

fn recognize(value: &Value) -> Option<String> {
    RECOGNIZERS.iter().find_map(|(name, recognizer)| {
        let text = recognizer(value)?;
        tracing::trace!(shape = name, "decoded rich text payload");
        Some(text)
    })
}

/// Render a scalar JSON value as text. Containers and null are not text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn direct_text(value: &Value) -> Option<String> {
    value.as_object()?.get("text").and_then(scalar_text)
}

fn attributed_string(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get("attributedString")?
        .as_object()?
        .get("string")
        .and_then(scalar_text)
}

fn quill_ops(value: &Value) -> Option<String> {
    concat_inserts(value.as_object()?.get("ops")?)
}

fn delta_ops(value: &Value) -> Option<String> {
    concat_inserts(value.as_object()?.get("delta")?.as_object()?.get("ops")?)
}

fn ns_string(value: &Value) -> Option<String> {
    value.as_object()?.get("NSString").and_then(scalar_text)
}

fn bare_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Join the string `insert` of every operation; embeds and malformed ops are skipped.
fn concat_inserts(ops: &Value) -> Option<String> {
    let ops = ops.as_array()?;
    Some(
        ops.iter()
            .filter_map(|op| op.as_object()?.get("insert")?.as_str())
            .collect(),
    )
}
