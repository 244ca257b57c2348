use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

pub const INVALID_MESSAGE: &str = "Message is required and must be a string";

/// Vibe search request
///
/// `message` is taken as raw JSON so a wrong type is reported by
/// validation rather than by the payload extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VibeSearchRequest {
    #[validate(required(message = "Message is required and must be a string"), custom(function = "validate_message_text"))]
    #[serde(default)]
    pub message: Option<Value>,
}

impl VibeSearchRequest {
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }
}

fn validate_message_text(message: &Value) -> Result<(), ValidationError> {
    match message.as_str() {
        Some(text) if !text.is_empty() => Ok(()),
        _ => {
            let mut err = ValidationError::new("message_text");
            err.message = Some(Cow::Borrowed(INVALID_MESSAGE));
            Err(err)
        }
    }
}
