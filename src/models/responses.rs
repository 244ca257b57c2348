use serde::{Deserialize, Serialize};
use crate::models::domain::{Property, VibeMatch};

pub const SEARCH_FAILED_MESSAGE: &str = "Vibe search failed. Please try again.";

/// Response for the vibe search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeSearchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: Vec<Property>,
    #[serde(rename = "matchData")]
    pub match_data: Vec<VibeMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl VibeSearchResponse {
    pub fn found(query: String, results: Vec<Property>, match_data: Vec<VibeMatch>) -> Self {
        Self {
            success: true,
            error: None,
            results,
            match_data,
            query: Some(query),
        }
    }

    /// Generic failure body; the underlying error is never included
    pub fn failed() -> Self {
        Self {
            success: false,
            error: Some(SEARCH_FAILED_MESSAGE.to_string()),
            results: vec![],
            match_data: vec![],
            query: None,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
