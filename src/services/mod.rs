// Service exports
pub mod catalog;
pub mod gemini;
pub mod model;

pub use catalog::{PropertyCatalog, CatalogError};
pub use gemini::GeminiClient;
pub use model::{CompletionModel, ModelError};
