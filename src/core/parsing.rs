use crate::models::VibeMatch;
use serde_json::Value;
use thiserror::Error;

/// Why a completion could not be turned into matches
#[derive(Debug, Error)]
pub enum CompletionParseError {
    #[error("completion is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("completion has no \"matches\" field")]
    MissingMatches,

    #[error("\"matches\" is not an array")]
    MatchesNotArray,
}

/// Remove markdown code fence markers the model may wrap its JSON in
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a raw completion into matches, unsorted
///
/// Entries are read one by one, so a single malformed entry only costs
/// that entry.
pub fn parse_completion(text: &str) -> Result<Vec<VibeMatch>, CompletionParseError> {
    let json: Value = serde_json::from_str(&strip_code_fences(text))
        .map_err(CompletionParseError::InvalidJson)?;

    let items = json
        .get("matches")
        .ok_or(CompletionParseError::MissingMatches)?
        .as_array()
        .ok_or(CompletionParseError::MatchesNotArray)?;

    Ok(items
        .iter()
        .filter_map(|item| {
            let parsed = VibeMatch::from_json(item);
            if parsed.is_none() {
                tracing::debug!("Skipping match entry without a usable id: {}", item);
            }
            parsed
        })
        .collect())
}

/// Sort matches by relevance score (descending)
///
/// Ties keep no particular order and duplicates are kept.
pub fn sort_by_relevance(matches: &mut [VibeMatch]) {
    matches.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
