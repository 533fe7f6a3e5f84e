use serde_json::json;

use crate::domain::food_analysis::entities::QualityLabel;

/// Instruction sent with every image. The model is asked for bare JSON but
/// replies are still normalized, see [`super::normalizer`].
pub const FOOD_ANALYSIS_PROMPT: &str = "Analyze this food image and return a JSON object with the following structure: {\"dish\": \"name of the dish\", \"freshness\": number (0-100), \"quality\": \"Unhealthy/Bad/Can't Determine/Good/Very Good\", \"quantity\": \"description\", \"nutrition_value\": number (0-100)}. Identify the dish in the image and rate the quality based on freshness, edibility, quantity, and nutrition value. Return ONLY valid JSON without any markdown formatting or code blocks.";

/// Returns the JSON schema for food analysis LLM responses
pub fn get_food_analysis_schema() -> serde_json::Value {
    let quality_labels: Vec<&str> = QualityLabel::ALL.iter().map(|l| l.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "dish": { "type": "string" },
            "freshness": { "type": "number", "minimum": 0, "maximum": 100 },
            "quality": {
                "type": "string",
                "enum": quality_labels
            },
            "quantity": { "type": "string" },
            "nutrition_value": { "type": "number", "minimum": 0, "maximum": 100 }
        },
        "required": ["dish", "freshness", "quality", "quantity", "nutrition_value"]
    })
}
