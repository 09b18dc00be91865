use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Keys every generated manual must carry, in wire spelling.
pub const REQUIRED_FIELDS: [&str; 4] = ["legal", "cases", "checklist", "aiAnalysis"];

/// Inbound body of `POST /generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[validate(
        required(message = "category is required"),
        length(min = 1, message = "category is required")
    )]
    pub category: Option<String>,

    #[validate(
        required(message = "menu is required"),
        length(min = 1, message = "menu is required")
    )]
    pub menu: Option<String>,

    /// Previously written manual, used as reference material for the model.
    #[serde(default)]
    pub manual_data: Option<ManualData>,
}

impl GenerationRequest {
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn menu(&self) -> &str {
        self.menu.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManualData {
    #[serde(default)]
    pub legal: String,
    #[serde(default)]
    pub cases: String,
}

/// A validated manual as returned to the caller.
///
/// Keys beyond the four required ones are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub legal: String,
    pub cases: String,
    pub checklist: String,
    pub ai_analysis: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerationResult {
    /// Build a result from a parsed JSON object.
    ///
    /// Fails with the list of required keys that are absent, not strings, or
    /// blank. Nothing partial is ever returned.
    pub fn from_object(mut object: Map<String, Value>) -> Result<Self, Vec<&'static str>> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| !is_filled(object.get(*key)))
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        let mut take = |key: &str| match object.remove(key) {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };

        let legal = take("legal");
        let cases = take("cases");
        let checklist = take("checklist");
        let ai_analysis = take("aiAnalysis");

        Ok(Self {
            legal,
            cases,
            checklist,
            ai_analysis,
            extra: object,
        })
    }
}

fn is_filled(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}
