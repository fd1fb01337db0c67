use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::catalog::IngredientCatalog;
use crate::chef::config::{ChefConfig, InitialConfig, MutationConfig};
use crate::chef::matcher::{Similarity, find_matches};
use crate::models::{IngredientFact, Recipe, RecipeIngredient};

/// Title-case a phrase: first letter of every alphabetic run upper, the rest lower.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Label for the recipe produced on a given attempt.
pub fn recipe_name(preferences: &str, attempt: u32) -> String {
    format!("{} Recipe Attempt {}", title_case(preferences), attempt)
}

/// Produces candidate recipes: a fresh one on the first attempt, a mutated
/// copy of the previous attempt afterwards.
pub struct RecipeGenerator<'c, S: Similarity> {
    catalog: &'c IngredientCatalog,
    similarity: S,
    config: ChefConfig,
}

impl<'c, S: Similarity> RecipeGenerator<'c, S> {
    pub fn new(catalog: &'c IngredientCatalog, similarity: S, config: ChefConfig) -> Self {
        Self {
            catalog,
            similarity,
            config,
        }
    }

    pub fn config(&self) -> &ChefConfig {
        &self.config
    }

    /// Generate the recipe for `attempt` (1-based).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        preferences: &str,
        servings: u32,
        attempt: u32,
        previous: Option<&Recipe>,
        rng: &mut R,
    ) -> Recipe {
        let ingredients = match (attempt, previous) {
            (1, _) => self.initial_ingredients(preferences),
            (_, Some(prev)) => mutate_ingredients(
                &prev.ingredients,
                self.catalog.all(),
                &self.config.mutation,
                rng,
            ),
            (_, None) => portions(
                self.catalog.first(self.config.initial.fallback_count),
                self.config.initial.quantity_g,
            ),
        };

        Recipe {
            name: recipe_name(preferences, attempt),
            servings,
            ingredients,
        }
    }

    /// Matched ingredients at the starting portion, or the catalog head when
    /// nothing matches.
    fn initial_ingredients(&self, preferences: &str) -> Vec<RecipeIngredient> {
        let InitialConfig {
            quantity_g,
            max_ingredients,
            fallback_count,
        } = self.config.initial;

        let matched = find_matches(
            preferences,
            self.catalog,
            self.config.matching.threshold,
            &self.similarity,
        );

        if matched.is_empty() {
            debug!(preferences, "no catalog matches, using fallback ingredients");
            return portions(self.catalog.first(fallback_count), quantity_g);
        }

        matched
            .into_iter()
            .take(max_ingredients)
            .map(|fact| RecipeIngredient::new(fact.name.clone(), quantity_g))
            .collect()
    }
}

fn portions(facts: &[IngredientFact], quantity_g: u32) -> Vec<RecipeIngredient> {
    facts
        .iter()
        .map(|fact| RecipeIngredient::new(fact.name.clone(), quantity_g))
        .collect()
}

/// Perturb a previous ingredient list.
///
/// Three steps, each seeing the result of the one before:
/// 1. jitter every portion by a factor in `[factor_min, factor_max]`, truncated
///    and floored at `min_quantity_g`;
/// 2. with `add_probability`, append one catalog entry not yet present;
/// 3. if more than `remove_above` remain, with `remove_probability` drop one.
pub fn mutate_ingredients<R: Rng + ?Sized>(
    previous: &[RecipeIngredient],
    catalog: &[IngredientFact],
    config: &MutationConfig,
    rng: &mut R,
) -> Vec<RecipeIngredient> {
    let mut ingredients = jitter_quantities(previous, config, rng);

    let present: HashSet<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    let candidates: Vec<&IngredientFact> = catalog
        .iter()
        .filter(|fact| !present.contains(fact.name.as_str()))
        .collect();

    if !candidates.is_empty() && rng.gen_bool(config.add_probability) {
        if let Some(fact) = candidates.choose(rng) {
            debug!(ingredient = %fact.name, "adding ingredient");
            ingredients.push(RecipeIngredient::new(fact.name.clone(), config.add_quantity_g));
        }
    }

    if ingredients.len() > config.remove_above && rng.gen_bool(config.remove_probability) {
        let idx = rng.gen_range(0..ingredients.len());
        let removed = ingredients.remove(idx);
        debug!(ingredient = %removed.name, "removing ingredient");
    }

    ingredients
}

/// Step 1 of mutation: scale each portion, never below the floor.
pub fn jitter_quantities<R: Rng + ?Sized>(
    previous: &[RecipeIngredient],
    config: &MutationConfig,
    rng: &mut R,
) -> Vec<RecipeIngredient> {
    previous
        .iter()
        .map(|ing| {
            let factor = rng.gen_range(config.factor_min..=config.factor_max);
            let scaled = (ing.quantity_g as f64 * factor) as u32;
            RecipeIngredient::new(ing.name.clone(), scaled.max(config.min_quantity_g))
        })
        .collect()
}
