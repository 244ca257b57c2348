use crate::models::Property;

/// Build the matchmaking prompt.
///
/// The whole dataset is embedded as compact JSON, so prompt size grows
/// linearly with the catalog.
pub fn build_prompt(query: &str, properties: &[Property]) -> Result<String, serde_json::Error> {
    let dataset = serde_json::to_string(properties)?;

    Ok(format!(
        "You're a real estate vibe matchmaker. Analyze this property dataset:{dataset}\n\
         User's vibe request: \"{query}\"\n\
         Respond STRICTLY in JSON format:\n\
         {{\n  \
           \"matches\": [{{\n    \
             \"id\": string,\n    \
             \"relevanceScore\": 1-10,\n    \
             \"matchReasons\": string[]\n  \
           }}]\n\
         }}\n"
    ))
}
