use crate::catalog::IngredientCatalog;
use crate::chef::{ChefOutcome, ScoredMatch};
use crate::models::{BalanceVerdict, Recipe};

/// Already-rounded value in its shortest form, keeping a trailing `.0`.
fn amount(value: f64) -> String {
    format!("{:?}", value)
}

/// Format one recipe attempt: name, ingredients and per-serving nutrition.
pub fn format_attempt(attempt: u32, recipe: &Recipe, verdict: &BalanceVerdict) -> String {
    let mut lines = vec![
        format!("=== Iteration {} ===", attempt),
        String::new(),
        format!("Recipe: {} (Serves {})", recipe.name, recipe.servings),
        "Ingredients:".to_string(),
    ];

    for item in &recipe.ingredients {
        lines.push(format!("- {}g {}", item.quantity_g, item.name));
    }

    let per = &verdict.per_serving;
    lines.push(String::new());
    lines.push("Nutrition Summary (Per Serving):".to_string());
    lines.push(format!("- Calories: {}", amount(per.calories)));
    lines.push(format!("- Protein: {}", amount(per.protein)));
    lines.push(format!("- Carbs: {}", amount(per.carbs)));
    lines.push(format!("- Fat: {}", amount(per.fat)));
    lines.push(String::new());
    lines.push(format!(
        "Balanced Meal: {}",
        if verdict.balanced { "Yes" } else { "No" }
    ));

    lines.join("\n")
}

/// Print one attempt, plus a retry note whenever it was not balanced.
pub fn display_attempt(attempt: u32, recipe: &Recipe, verdict: &BalanceVerdict) {
    println!();
    println!("{}", format_attempt(attempt, recipe, verdict));

    if !verdict.balanced {
        println!();
        println!("Recipe is not balanced. Adjusting ingredients and retrying...");
    }
}

/// Print the closing line of a refinement run.
pub fn display_outcome(outcome: &ChefOutcome) {
    println!();
    if outcome.succeeded {
        println!(
            "The recipe is balanced. ({} attempt{})",
            outcome.attempts,
            if outcome.attempts == 1 { "" } else { "s" }
        );
    } else {
        println!("Could not create a balanced recipe within iteration limit.");
        println!("Showing the last attempt: {}", outcome.recipe.name);
    }
    println!();
}

/// Print the catalog in load order.
pub fn display_catalog(catalog: &IngredientCatalog) {
    if catalog.is_empty() {
        println!("Ingredient catalog: (empty)");
        return;
    }

    println!();
    println!("=== Ingredient Catalog ({} items, per 100g) ===", catalog.len());
    println!();

    let width = catalog.all().iter().map(|f| f.name.len()).max().unwrap_or(10);
    for fact in catalog.all() {
        println!(
            "  {:<width$}  {:>6.1} cal | P:{:>5.1} C:{:>5.1} F:{:>5.1}",
            fact.name,
            fact.calories,
            fact.protein,
            fact.carbs,
            fact.fat,
            width = width
        );
    }
    println!();
}

/// Print fuzzy matches with their scores.
pub fn display_matches(matches: &[ScoredMatch<'_>], threshold: f64) {
    if matches.is_empty() {
        println!(
            "No catalog entries reach similarity {:.2}; the first catalog entries would be used.",
            threshold
        );
        return;
    }

    for m in matches {
        println!("  {:<16} <- '{}' ({:.3})", m.fact.name, m.token, m.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionTotals, PerServingNutrition, RecipeIngredient};

    #[test]
    fn test_format_attempt() {
        let recipe = Recipe {
            name: "Chicken Rice Recipe Attempt 1".to_string(),
            servings: 2,
            ingredients: vec![
                RecipeIngredient::new("chicken", 100),
                RecipeIngredient::new("rice", 100),
            ],
        };
        let verdict = BalanceVerdict {
            total: NutritionTotals::default(),
            per_serving: PerServingNutrition {
                calories: 147.5,
                protein: 16.85,
                carbs: 14.0,
                fat: 1.95,
            },
            balanced: true,
        };

        let text = format_attempt(1, &recipe, &verdict);
        assert!(text.starts_with("=== Iteration 1 ==="));
        assert!(text.contains("Recipe: Chicken Rice Recipe Attempt 1 (Serves 2)"));
        assert!(text.contains("- 100g chicken\n- 100g rice"));
        assert!(text.contains("- Calories: 147.5\n"));
        assert!(text.contains("- Protein: 16.85"));
        assert!(text.contains("- Carbs: 14.0\n"));
        assert!(text.contains("- Fat: 1.95"));
        assert!(text.ends_with("Balanced Meal: Yes"));
    }
}
