//! Best-effort extraction of the manual JSON from free model text.
//!
//! Models often ignore "JSON only" instructions: the object may come wrapped in
//! code fences or surrounded by prose. Parsing is a direct attempt first, then
//! a retry on the widest `{...}` span.

use crate::error::ManualError;
use crate::models::GenerationResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:json)?").expect("code fence pattern is valid"));

static BRACE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("brace span pattern is valid"));

/// Remove every code-fence marker and trim surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text.trim(), "").trim().to_string()
}

/// Parse `text` as a JSON object. Only text that is not valid JSON falls back to
/// its first-to-last brace span.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ManualError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => return Ok(object),
        Ok(_) => return Err(ManualError::Parse("response is not a JSON object".to_string())),
        Err(_) => {}
    }

    let span = BRACE_SPAN
        .find(text)
        .ok_or_else(|| ManualError::Parse("no JSON object found in response".to_string()))?;

    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ManualError::Parse("response is not a JSON object".to_string())),
        Err(e) => Err(ManualError::Parse(e.to_string())),
    }
}

/// Turn raw model text into a validated manual.
pub fn parse_manual(raw: &str) -> Result<GenerationResult, ManualError> {
    let cleaned = strip_code_fences(raw);
    let object = extract_json_object(&cleaned)?;
    GenerationResult::from_object(object).map_err(ManualError::IncompleteResult)
}
