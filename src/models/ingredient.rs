use serde::{Deserialize, Serialize};

/// Reference nutrition facts for one ingredient, per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientFact {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl IngredientFact {
    pub fn new(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Basic validation: finite, non-negative values and a non-blank name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.calories, self.protein, self.carbs, self.fat]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} C:{} F:{} per 100g",
            self.name, self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// One line of a recipe: a catalog ingredient and its weight in grams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity_g: u32,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity_g: u32) -> Self {
        Self {
            name: name.into(),
            quantity_g,
        }
    }
}

/// A candidate recipe produced by one refinement attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Names of all ingredients, in recipe order.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Chicken Rice Recipe Attempt 1".to_string(),
            servings: 2,
            ingredients: vec![
                RecipeIngredient::new("chicken", 100),
                RecipeIngredient::new("rice", 150),
            ],
        }
    }

    #[test]
    fn test_is_valid() {
        let fact = IngredientFact::new("chicken", 165.0, 31.0, 0.0, 3.6);
        assert!(fact.is_valid());

        let negative = IngredientFact::new("chicken", -1.0, 31.0, 0.0, 3.6);
        assert!(!negative.is_valid());

        let blank = IngredientFact::new("  ", 1.0, 1.0, 1.0, 1.0);
        assert!(!blank.is_valid());

        let nan = IngredientFact::new("rice", f64::NAN, 1.0, 1.0, 1.0);
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_recipe_helpers() {
        let recipe = sample_recipe();
        assert_eq!(recipe.ingredient_names(), vec!["chicken", "rice"]);
    }
}
