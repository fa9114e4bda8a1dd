pub const IDENTIFY_PROMPT: &str = "Identify the plant in this image. \
Respond with a single JSON object with the fields: \
name (common name), scientificName, description, \
careTips (array of short care tips), problems (array of visible problems, empty if none) \
and confidence (number between 0 and 1). Do not add any text outside the JSON object.";

pub const DISEASE_PROMPT: &str = "Detect any plant diseases or problems visible in this image. \
Respond with a single JSON object with the fields: \
name (disease name, or \"Healthy\" if none is visible), description (diagnosis), \
treatment (array of treatment suggestions), prevention (array of prevention tips) \
and confidence (number between 0 and 1). Do not add any text outside the JSON object.";
