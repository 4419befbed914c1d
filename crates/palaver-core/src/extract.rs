//! Response content extraction.
//!
//! The agent endpoint returns arbitrary JSON whose shape is not part of the
//! contract. [`extract_content`] walks the value with an ordered set of
//! heuristics and produces the best-guess display text; [`display_text`]
//! applies the caller-side placeholder substitution on top. Neither function
//! can fail: absence or wrong types at any level degrade to an empty string.

use serde_json::Value;

/// Field names probed on objects, in priority order. The first field that is
/// present, truthy, and recursively yields non-blank text wins.
const PRIORITY_FIELDS: [&str; 11] = [
    "content",
    "message",
    "response",
    "text",
    "completion",
    "answer",
    "result",
    "output",
    "data",
    "body",
    "reply",
];

/// Shown when extraction finds nothing usable.
pub const FALLBACK_REPLY: &str = "Sorry, I could not produce a response.";

/// Shown when the extracted text is an upstream stringified-object sentinel.
pub const UNPARSEABLE_REPLY: &str = "The response could not be processed. Please try again.";

/// The degenerate output of JavaScript's default object-to-string
/// conversion, which some upstream stacks leak into response text.
const STRINGIFIED_OBJECT: &str = "[object Object]";

/// Recursively derive display text from an arbitrary JSON value.
///
/// - Strings are returned as-is, even when empty.
/// - Arrays recurse into their first element.
/// - Objects try the priority fields, then `choices[0]`, then the *last*
///   element of `messages` (chat transcripts put the newest message last),
///   then the first own field holding a non-blank string.
/// - Everything else yields an empty string.
pub fn extract_content(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.first().map(extract_content).unwrap_or_default(),
        Value::Object(fields) => {
            for name in PRIORITY_FIELDS {
                let Some(candidate) = fields.get(name) else {
                    continue;
                };
                if !is_truthy(candidate) {
                    continue;
                }
                let extracted = extract_content(candidate);
                if !extracted.trim().is_empty() {
                    return extracted;
                }
            }

            if let Some(Value::Array(choices)) = fields.get("choices") {
                if let Some(first) = choices.first() {
                    return extract_content(first);
                }
            }

            if let Some(Value::Array(messages)) = fields.get("messages") {
                if let Some(last) = messages.last() {
                    return extract_content(last);
                }
            }

            // Last resort: the first field whose value is a non-blank string.
            for field in fields.values() {
                if let Value::String(s) = field {
                    if !s.trim().is_empty() {
                        return s.clone();
                    }
                }
            }

            String::new()
        }
        _ => String::new(),
    }
}

/// JavaScript truthiness for a JSON value.
///
/// The priority-field probe only descends into truthy values, so an empty
/// string or a zero under `content` falls through to later fields.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Derive the final display string for an assistant turn.
///
/// Blank extraction results become [`FALLBACK_REPLY`]; a stringified-object
/// sentinel becomes [`UNPARSEABLE_REPLY`] and the raw payload is logged for
/// offline diagnosis. Otherwise the trimmed extracted text is returned with
/// its Markdown untouched.
pub fn display_text(value: &Value) -> String {
    let extracted = extract_content(value);
    let trimmed = extracted.trim();

    if trimmed.is_empty() {
        return FALLBACK_REPLY.to_string();
    }

    if trimmed.contains(STRINGIFIED_OBJECT) {
        tracing::warn!(payload = %value, "agent response carried a stringified object");
        return UNPARSEABLE_REPLY.to_string();
    }

    trimmed.to_string()
}
