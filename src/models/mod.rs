mod ingredient;
mod nutrition;

pub use ingredient::{IngredientFact, Recipe, RecipeIngredient};
pub use nutrition::{round2, BalanceVerdict, NutritionTotals, PerServingNutrition};
