use crate::core::{
    parsing::{parse_completion, sort_by_relevance},
    prompt::build_prompt,
};
use crate::models::{Property, VibeMatch};
use crate::services::CompletionModel;
use std::sync::Arc;
use thiserror::Error;

/// Failures the matcher cannot recover from
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Failed to serialize dataset into prompt: {0}")]
    Prompt(#[from] serde_json::Error),
}

/// Vibe matcher - delegates relevance judgement to a completion model
///
/// # Pipeline Stages
/// 1. Prompt construction (dataset + query + response shape)
/// 2. Model call
/// 3. Completion parsing
/// 4. Ranking by relevance score
///
/// Model and parse failures collapse into an empty match list.
#[derive(Clone)]
pub struct Matcher {
    model: Arc<dyn CompletionModel>,
}

impl Matcher {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Find properties matching a vibe description
    ///
    /// # Arguments
    /// * `query` - Free-text vibe, already validated as non-empty
    /// * `properties` - The full dataset to embed in the prompt
    ///
    /// # Returns
    /// Matches sorted by relevance score, highest first
    pub async fn find_matches(
        &self,
        query: &str,
        properties: &[Property],
    ) -> Result<Vec<VibeMatch>, MatcherError> {
        let prompt = build_prompt(query, properties)?;

        tracing::debug!(
            "Built prompt for {} properties ({} bytes)",
            properties.len(),
            prompt.len()
        );

        let completion = match self.model.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Model call failed, returning no matches: {}", e);
                return Ok(vec![]);
            }
        };

        let mut matches = match parse_completion(&completion) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Could not parse model completion, returning no matches: {}", e);
                return Ok(vec![]);
            }
        };

        sort_by_relevance(&mut matches);

        Ok(matches)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}
