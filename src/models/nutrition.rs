use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Round to 2 decimal places, the precision used for per-serving reporting.
///
/// Exact halves go to the even neighbour, so `1.125` becomes `1.12`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Additive nutrition aggregate over a recipe's ingredients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    /// Divide by servings and round each field for reporting.
    pub fn per_serving(&self, servings: u32) -> PerServingNutrition {
        let s = servings.max(1) as f64;
        PerServingNutrition {
            calories: round2(self.calories / s),
            protein: round2(self.protein / s),
            carbs: round2(self.carbs / s),
            fat: round2(self.fat / s),
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

/// Per-serving nutrition, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerServingNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Outcome of evaluating a recipe against the balance rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceVerdict {
    pub total: NutritionTotals,
    pub per_serving: PerServingNutrition,
    pub balanced: bool,
}
