use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::chef::config::BalanceRule;
use crate::models::{BalanceVerdict, NutritionTotals, PerServingNutrition, Recipe};

impl BalanceRule {
    /// Both thresholds must hold.
    pub fn is_balanced(&self, per_serving: &PerServingNutrition) -> bool {
        per_serving.protein >= self.min_protein && per_serving.calories <= self.max_calories
    }
}

/// Sum nutrition over the recipe, scaling each fact by `quantity / 100`.
///
/// Ingredients missing from the catalog contribute nothing.
pub fn sum_nutrition(recipe: &Recipe, catalog: &IngredientCatalog) -> NutritionTotals {
    let mut total = NutritionTotals::default();

    for ingredient in &recipe.ingredients {
        let Some(fact) = catalog.get(&ingredient.name) else {
            debug!(ingredient = %ingredient.name, "skipping ingredient not in catalog");
            continue;
        };

        let factor = ingredient.quantity_g as f64 / 100.0;
        total += NutritionTotals {
            calories: fact.calories * factor,
            protein: fact.protein * factor,
            carbs: fact.carbs * factor,
            fat: fact.fat * factor,
        };
    }

    total
}

/// Evaluate a recipe's per-serving nutrition against `rule`.
pub fn evaluate(recipe: &Recipe, catalog: &IngredientCatalog, rule: &BalanceRule) -> BalanceVerdict {
    let total = sum_nutrition(recipe, catalog);
    let per_serving = total.per_serving(recipe.servings);

    BalanceVerdict {
        total,
        per_serving,
        balanced: rule.is_balanced(&per_serving),
    }
}
