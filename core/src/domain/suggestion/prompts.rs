/// Builds the regional suggestion prompt for a human-readable region name.
pub fn suggestion_prompt(region_label: &str, count: usize) -> String {
    format!(
        "Suggest {count} plants that grow well in {region_label}. \
Respond with a JSON array only, where each element is an object with the fields \
name (common name), scientificName and description (one or two sentences on why \
it suits the region and how to care for it)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_region_and_count() {
        let prompt = suggestion_prompt("Southern India", 5);
        assert!(prompt.starts_with("Suggest 5 plants that grow well in Southern India."));
        assert!(prompt.contains("JSON array"));
    }
}
