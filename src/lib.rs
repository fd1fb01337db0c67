pub mod catalog;
pub mod chef;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod survey;

pub use catalog::{IngredientCatalog, load_catalog};
pub use chef::{ChefConfig, ChefOutcome, RefinementController};
pub use error::{ChefError, Result};
pub use models::{BalanceVerdict, IngredientFact, Recipe, RecipeIngredient};
