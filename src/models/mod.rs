// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Property, VibeMatch};
pub use requests::{VibeSearchRequest, INVALID_MESSAGE};
pub use responses::{VibeSearchResponse, HealthResponse, ErrorResponse, SEARCH_FAILED_MESSAGE};
