// Core pipeline exports
pub mod join;
pub mod matcher;
pub mod parsing;
pub mod prompt;

pub use join::join_matches;
pub use matcher::{Matcher, MatcherError};
pub use parsing::{parse_completion, sort_by_relevance, strip_code_fences, CompletionParseError};
pub use prompt::build_prompt;
