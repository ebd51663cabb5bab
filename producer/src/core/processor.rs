//! Parsing of model output into FAQ questions

use regex::Regex;
use serde_json::Value;

use crate::error::{ProducerError, ProducerResult};

/// Extracts JSON objects and question lists from free-form model text
pub struct ResponseProcessor {
    json_object_regex: Regex,
}

impl ResponseProcessor {
    pub fn new() -> Self {
        // Greedy: first `{` through last `}`, across newlines
        let json_object_regex = Regex::new(r"(?s)\{.*\}").expect("static pattern");
        Self { json_object_regex }
    }

    /// Locate the first top-level `{...}` span anywhere in the text
    pub fn extract_json_object<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.json_object_regex.find(text).map(|m| m.as_str())
    }

    /// Parse the embedded JSON object, tolerating surrounding prose
    pub fn parse_json_object(&self, text: &str) -> ProducerResult<Value> {
        let json_text = self
            .extract_json_object(text)
            .ok_or_else(|| ProducerError::generation("No JSON object found in model output."))?;

        serde_json::from_str(json_text)
            .map_err(|e| ProducerError::generation(format!("Model output is not valid JSON: {e}")))
    }

    /// Parse a `{"questions": [...]}` reply into at most `limit` non-empty strings
    pub fn parse_questions(&self, text: &str, limit: usize) -> ProducerResult<Vec<String>> {
        let items = self.questions_array(text)?;
        Ok(normalize_questions(&items, limit))
    }

    /// Parse a structured `{"questions": [{"category", "question"}, ...]}` reply
    ///
    /// Items are read through their `question` field; bare strings are
    /// accepted as-is and anything else is skipped.
    pub fn parse_structured_questions(&self, text: &str, limit: usize) -> ProducerResult<Vec<String>> {
        let items = self.questions_array(text)?;
        Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.as_str()),
                Value::Object(map) => map.get("question").and_then(Value::as_str),
                _ => None,
            })
            .filter(|q| !q.is_empty())
            .take(limit)
            .map(str::to_string)
            .collect())
    }

    fn questions_array(&self, text: &str) -> ProducerResult<Vec<Value>> {
        let mut json = self.parse_json_object(text)?;
        match json.get_mut("questions").map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ProducerError::generation("Model output has no questions array.")),
        }
    }
}

impl Default for ResponseProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce every item to its string form, drop empty strings, keep order, cap at `limit`
///
/// Coercion follows JavaScript's `String(x)`, so only items that render as
/// `""` (the empty string, an empty array) are dropped.
pub fn normalize_questions(items: &[Value], limit: usize) -> Vec<String> {
    items
        .iter()
        .map(display_string)
        .filter(|q| !q.is_empty())
        .take(limit)
        .collect()
}

/// JavaScript `String(x)` for a JSON value
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        // Array elements that are null render as empty, as in Array.prototype.join
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
