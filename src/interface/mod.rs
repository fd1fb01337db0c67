pub mod prompts;
pub mod render;

pub use prompts::{parse_servings, prompt_preferences, prompt_servings, validate_preferences};
pub use render::{
    display_attempt, display_catalog, display_matches, display_outcome, format_attempt,
};
