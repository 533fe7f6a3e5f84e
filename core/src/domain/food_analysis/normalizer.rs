use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::food_analysis::entities::AnalysisResult;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fenced block pattern is valid")
});

/// Narrow a model reply down to the text most likely to be the JSON payload.
///
/// Keeps the inside of the first fenced block if there is one, then the span
/// from the first `{` to the last `}`. With several objects in the text the
/// span covers all of them and will not parse.
pub fn extract_json_candidate(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(inner) = FENCED_BLOCK.captures(text).and_then(|c| c.get(1)) {
        text = inner.as_str().trim();
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Turn free-form model output into an [`AnalysisResult`].
///
/// Never fails: anything that does not parse as a JSON object yields
/// [`AnalysisResult::fallback`].
pub fn normalize_analysis(raw: &str) -> AnalysisResult {
    let candidate = extract_json_candidate(raw);

    let object = match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            tracing::warn!(
                raw_response = %raw,
                json_type = json_type_name(&other),
                "AI response is not a JSON object, using fallback analysis"
            );
            return AnalysisResult::fallback();
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                raw_response = %raw,
                "Error parsing AI response, using fallback analysis"
            );
            return AnalysisResult::fallback();
        }
    };

    let result = AnalysisResult::from_object(object);

    if result.quality_label().is_none() {
        tracing::warn!(quality = %result.quality, "AI response has an unknown quality label");
    }

    tracing::debug!(?result, "AI analysis result");
    result
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
