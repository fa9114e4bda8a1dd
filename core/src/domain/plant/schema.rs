use serde_json::json;

/// Returns the JSON schema for plant identification LLM responses
pub fn get_identification_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "scientificName": { "type": "string" },
            "description": { "type": "string" },
            "careTips": {
                "type": "array",
                "items": { "type": "string" }
            },
            "problems": {
                "type": "array",
                "items": { "type": "string" }
            },
            "confidence": { "type": "number" }
        },
        "required": ["name", "scientificName", "description", "careTips", "problems", "confidence"]
    })
}

/// Returns the JSON schema for disease detection LLM responses
pub fn get_disease_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "treatment": {
                "type": "array",
                "items": { "type": "string" }
            },
            "prevention": {
                "type": "array",
                "items": { "type": "string" }
            },
            "confidence": { "type": "number" }
        },
        "required": ["name", "description", "treatment", "prevention", "confidence"]
    })
}
