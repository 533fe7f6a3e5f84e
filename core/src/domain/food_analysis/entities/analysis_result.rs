use serde::Serialize;
use serde_json::{Map, Value, json};

use super::quality_label::QualityLabel;

pub const DEFAULT_DISH: &str = "Unknown Food Item";
pub const DEFAULT_FRESHNESS: u64 = 75;
pub const DEFAULT_QUANTITY: &str = "Medium";
pub const DEFAULT_NUTRITION_VALUE: u64 = 70;

pub const NUTRITION_VALUE_KEY: &str = "nutrition_value";
/// Key variant some model replies use instead of `nutrition_value`
pub const NUTRITION_VALUE_ALIAS: &str = "nutrition value";

/// Normalized food analysis returned to clients.
///
/// The five named fields are always present. Their values are kept as raw JSON
/// because the model may answer with either numbers or strings, and the
/// fallback record uses strings for the numeric scores. Keys the model added
/// on its own are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub dish: Value,
    pub freshness: Value,
    pub quality: Value,
    pub quantity: Value,
    pub nutrition_value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Record used when the model reply holds no parseable JSON object.
    ///
    /// Scores are strings here, unlike the per-field defaults applied to a
    /// parsed reply. Clients have always received this shape.
    pub fn fallback() -> Self {
        Self {
            dish: json!(DEFAULT_DISH),
            freshness: json!(DEFAULT_FRESHNESS.to_string()),
            quality: json!(QualityLabel::Good.as_str()),
            quantity: json!(DEFAULT_QUANTITY),
            nutrition_value: json!(DEFAULT_NUTRITION_VALUE.to_string()),
            extra: Map::new(),
        }
    }

    /// Build a record from a parsed reply object, filling absent fields with defaults.
    ///
    /// `nutrition value` is moved to `nutrition_value` only when the latter is
    /// missing. When both are present the underscore key wins and the alias
    /// stays in `extra`.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let nutrition_value = match object.remove(NUTRITION_VALUE_KEY) {
            Some(value) => value,
            None => object
                .remove(NUTRITION_VALUE_ALIAS)
                .unwrap_or_else(|| json!(DEFAULT_NUTRITION_VALUE)),
        };

        Self {
            dish: object
                .remove("dish")
                .unwrap_or_else(|| json!(DEFAULT_DISH)),
            freshness: object
                .remove("freshness")
                .unwrap_or_else(|| json!(DEFAULT_FRESHNESS)),
            quality: object
                .remove("quality")
                .unwrap_or_else(|| json!(QualityLabel::Good.as_str())),
            quantity: object
                .remove("quantity")
                .unwrap_or_else(|| json!(DEFAULT_QUANTITY)),
            nutrition_value,
            extra: object,
        }
    }

    /// Look up a key among the named fields first, then among the extra keys
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "dish" => Some(&self.dish),
            "freshness" => Some(&self.freshness),
            "quality" => Some(&self.quality),
            "quantity" => Some(&self.quantity),
            NUTRITION_VALUE_KEY => Some(&self.nutrition_value),
            other => self.extra.get(other),
        }
    }

    /// The quality grade, if the model used one of the known labels
    pub fn quality_label(&self) -> Option<QualityLabel> {
        self.quality.as_str().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_uses_string_scores() {
        let fallback = AnalysisResult::fallback();
        assert_eq!(fallback.freshness, json!("75"));
        assert_eq!(fallback.nutrition_value, json!("70"));
        assert_eq!(fallback.quality_label(), Some(QualityLabel::Good));
        assert!(fallback.extra.is_empty());
    }

    #[test]
    fn test_from_empty_object_uses_numeric_defaults() {
        let result = AnalysisResult::from_object(Map::new());
        assert_eq!(result.dish, json!("Unknown Food Item"));
        assert_eq!(result.freshness, json!(75));
        assert_eq!(result.quality, json!("Good"));
        assert_eq!(result.quantity, json!("Medium"));
        assert_eq!(result.nutrition_value, json!(70));
    }

    #[test]
    fn test_serialized_keys() {
        let mut object = Map::new();
        object.insert("calories".to_string(), json!(320));
        let value = serde_json::to_value(AnalysisResult::from_object(object)).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        for key in ["dish", "freshness", "quality", "quantity", "nutrition_value", "calories"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_get_reaches_extra_keys() {
        let mut object = Map::new();
        object.insert(NUTRITION_VALUE_KEY.to_string(), json!(1));
        object.insert(NUTRITION_VALUE_ALIAS.to_string(), json!(2));
        let result = AnalysisResult::from_object(object);

        assert_eq!(result.get(NUTRITION_VALUE_KEY), Some(&json!(1)));
        assert_eq!(result.get(NUTRITION_VALUE_ALIAS), Some(&json!(2)));
        assert_eq!(result.get("missing"), None);
    }
}
