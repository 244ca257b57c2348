use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling the generative model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Model returned no completion text")]
    EmptyCompletion,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Text completion capability: prompt in, raw text out.
///
/// The output is best-effort; nothing guarantees it is valid JSON.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}
