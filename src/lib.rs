//! Vibe Search - match real-estate listings to a free-text "vibe"
//!
//! The dataset and the user's description are handed to a generative model,
//! whose ranked reply is joined back to full property records.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, MatcherError, join_matches};
pub use models::{Property, VibeMatch, VibeSearchRequest, VibeSearchResponse};
pub use services::{CompletionModel, GeminiClient, ModelError, PropertyCatalog};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = PropertyCatalog::default();
        assert!(join_matches(&catalog, &[VibeMatch::new("p1", 5, vec![])]).is_empty());
    }
}
