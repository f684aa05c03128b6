//! Response normalization: turns a response object of unknown concrete shape
//! into a plain text answer.
//!
//! Instead of probing attributes sequentially at the call site, the response
//! is classified once into a [`ResponseShape`] and matched exhaustively.
//! Normalization never fails: an unrecognized shape degrades to the JSON
//! string of the whole response, and a missing response yields an empty
//! string.

use serde_json::Value;

/// The recognized shapes of an inference response, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A direct, non-empty top-level `text` field.
    DirectText(String),
    /// `candidates[0].content.parts[0].text` — the standard generateContent shape.
    CandidateParts(String),
    /// `candidates[0].output[0].content[0].text` — alternate nested layout.
    CandidateOutput(String),
    /// Nothing recognizable; carries the original value for stringification.
    Unrecognized(Value),
}

/// Classifies a response value into the first matching shape.
pub fn classify(response: &Value) -> ResponseShape {
    if let Some(text) = response.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return ResponseShape::DirectText(text.to_string());
        }
    }

    if let Some(text) = response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
    {
        return ResponseShape::CandidateParts(text.to_string());
    }

    if let Some(text) = response
        .pointer("/candidates/0/output/0/content/0/text")
        .and_then(Value::as_str)
    {
        return ResponseShape::CandidateOutput(text.to_string());
    }

    ResponseShape::Unrecognized(response.clone())
}

/// Extracts the answer text from an optional response. `None` or JSON null
/// yields an empty string; everything else yields non-empty text.
pub fn normalize(response: Option<&Value>) -> String {
    let response = match response {
        Some(v) if !v.is_null() => v,
        _ => return String::new(),
    };

    match classify(response) {
        ResponseShape::DirectText(text) => text,
        ResponseShape::CandidateParts(text) => text,
        ResponseShape::CandidateOutput(text) => text,
        ResponseShape::Unrecognized(value) => value.to_string(),
    }
}
