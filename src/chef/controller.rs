use rand::Rng;
use tracing::info;

use crate::catalog::IngredientCatalog;
use crate::chef::config::ChefConfig;
use crate::chef::evaluator::evaluate;
use crate::chef::generator::RecipeGenerator;
use crate::chef::matcher::Similarity;
use crate::error::{ChefError, Result};
use crate::models::{BalanceVerdict, Recipe};

/// Where the refinement loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementState {
    /// Still searching; holds the attempt about to run.
    Attempting(u32),
    /// A balanced recipe was found.
    Succeeded,
    /// The attempt budget ran out without a balanced recipe.
    Exhausted,
}

/// Final result of one refinement run.
///
/// Always carries the last recipe produced, even when no balanced one was found.
#[derive(Debug, Clone)]
pub struct ChefOutcome {
    pub recipe: Recipe,
    pub verdict: BalanceVerdict,
    pub succeeded: bool,
    pub attempts: u32,
    pub state: RefinementState,
}

/// Drives generate/evaluate cycles until a balanced recipe appears or the
/// attempt budget is spent. One controller serves one request at a time.
pub struct RefinementController<'c, S: Similarity, R: Rng> {
    catalog: &'c IngredientCatalog,
    generator: RecipeGenerator<'c, S>,
    rng: R,
}

impl<'c, S: Similarity, R: Rng> RefinementController<'c, S, R> {
    pub fn new(catalog: &'c IngredientCatalog, similarity: S, config: ChefConfig, rng: R) -> Self {
        Self {
            catalog,
            generator: RecipeGenerator::new(catalog, similarity, config),
            rng,
        }
    }

    /// Run the loop without observing intermediate attempts.
    pub fn run(&mut self, preferences: &str, servings: u32) -> Result<ChefOutcome> {
        self.run_with(preferences, servings, |_, _, _| {})
    }

    /// Run the loop, calling `on_attempt` after every evaluation.
    pub fn run_with<F>(
        &mut self,
        preferences: &str,
        servings: u32,
        mut on_attempt: F,
    ) -> Result<ChefOutcome>
    where
        F: FnMut(u32, &Recipe, &BalanceVerdict),
    {
        self.check_request(preferences, servings)?;

        let config = self.generator.config();
        let max_attempts = config.max_attempts;
        let rule = config.balance;

        let mut attempt = 1;
        let mut previous: Option<Recipe> = None;

        loop {
            let recipe = self.generator.generate(
                preferences,
                servings,
                attempt,
                previous.as_ref(),
                &mut self.rng,
            );
            let verdict = evaluate(&recipe, self.catalog, &rule);
            on_attempt(attempt, &recipe, &verdict);

            info!(
                attempt,
                ingredients = recipe.ingredients.len(),
                calories = verdict.per_serving.calories,
                protein = verdict.per_serving.protein,
                balanced = verdict.balanced,
                "evaluated recipe"
            );

            let state = next_state(attempt, max_attempts, verdict.balanced);
            if let RefinementState::Attempting(next) = state {
                previous = Some(recipe);
                attempt = next;
                continue;
            }

            if state == RefinementState::Exhausted {
                info!(max_attempts, "no balanced recipe within attempt limit");
            }
            return Ok(ChefOutcome {
                recipe,
                verdict,
                succeeded: state == RefinementState::Succeeded,
                attempts: attempt,
                state,
            });
        }
    }

    fn check_request(&self, preferences: &str, servings: u32) -> Result<()> {
        if servings == 0 {
            return Err(ChefError::InvalidServings(
                "servings must be a positive integer".to_string(),
            ));
        }
        if preferences.trim().is_empty() {
            return Err(ChefError::InvalidPreferences);
        }
        if self.catalog.is_empty() {
            return Err(ChefError::NoIngredientsAvailable);
        }
        self.generator.config().validate()
    }
}

/// Transition after evaluating `attempt`.
pub fn next_state(attempt: u32, max_attempts: u32, balanced: bool) -> RefinementState {
    if balanced {
        RefinementState::Succeeded
    } else if attempt >= max_attempts {
        RefinementState::Exhausted
    } else {
        RefinementState::Attempting(attempt + 1)
    }
}
