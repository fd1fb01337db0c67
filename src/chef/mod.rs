pub mod config;
pub mod constants;
pub mod controller;
pub mod evaluator;
pub mod generator;
pub mod matcher;

pub use config::{BalanceRule, ChefConfig, InitialConfig, MatchingConfig, MutationConfig};
pub use constants::*;
pub use controller::{ChefOutcome, RefinementController, RefinementState, next_state};
pub use evaluator::{evaluate, sum_nutrition};
pub use generator::{RecipeGenerator, jitter_quantities, mutate_ingredients, recipe_name, title_case};
pub use matcher::{
    JaroWinkler, NormalizedLevenshtein, RatcliffObershelp, ScoredMatch, Similarity,
    SimilarityKind, find_matches, score_matches,
};
