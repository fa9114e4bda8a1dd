use serde_json::json;

/// Returns the JSON schema for regional suggestion LLM responses
pub fn get_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "scientificName": { "type": "string" },
                "description": { "type": "string" }
            },
            "required": ["name", "scientificName", "description"]
        }
    })
}
