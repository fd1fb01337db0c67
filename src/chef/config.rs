use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chef::constants::*;
use crate::chef::matcher::SimilarityKind;
use crate::error::{ChefError, Result};

/// Fuzzy matching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub threshold: f64,
    pub similarity: SimilarityKind,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            similarity: SimilarityKind::default(),
        }
    }
}

/// How the first attempt is seeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConfig {
    pub quantity_g: u32,
    pub max_ingredients: usize,
    pub fallback_count: usize,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            quantity_g: INITIAL_QUANTITY_G,
            max_ingredients: MAX_INITIAL_INGREDIENTS,
            fallback_count: FALLBACK_INGREDIENT_COUNT,
        }
    }
}

/// How a previous attempt is perturbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    pub factor_min: f64,
    pub factor_max: f64,
    pub min_quantity_g: u32,
    pub add_probability: f64,
    pub add_quantity_g: u32,
    pub remove_probability: f64,
    pub remove_above: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            factor_min: MUTATION_FACTOR_MIN,
            factor_max: MUTATION_FACTOR_MAX,
            min_quantity_g: MIN_QUANTITY_G,
            add_probability: ADD_PROBABILITY,
            add_quantity_g: ADD_QUANTITY_G,
            remove_probability: REMOVE_PROBABILITY,
            remove_above: REMOVE_ABOVE,
        }
    }
}

/// Per-serving thresholds a recipe must meet to count as balanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceRule {
    pub min_protein: f64,
    pub max_calories: f64,
}

impl Default for BalanceRule {
    fn default() -> Self {
        Self {
            min_protein: MIN_PROTEIN_PER_SERVING,
            max_calories: MAX_CALORIES_PER_SERVING,
        }
    }
}

/// Everything that tunes one refinement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChefConfig {
    pub max_attempts: u32,
    pub matching: MatchingConfig,
    pub initial: InitialConfig,
    pub mutation: MutationConfig,
    pub balance: BalanceRule,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            matching: MatchingConfig::default(),
            initial: InitialConfig::default(),
            mutation: MutationConfig::default(),
            balance: BalanceRule::default(),
        }
    }
}

impl ChefConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ChefConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the search meaningless.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(ChefError::InvalidConfig(msg.to_string()));

        if self.max_attempts == 0 {
            return invalid("max_attempts must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.matching.threshold) {
            return invalid("matching.threshold must be within [0, 1]");
        }
        if self.initial.quantity_g == 0 || self.initial.max_ingredients == 0 {
            return invalid("initial quantity and ingredient count must be positive");
        }

        let m = &self.mutation;
        if !(m.factor_min > 0.0 && m.factor_min <= m.factor_max && m.factor_max.is_finite()) {
            return invalid("mutation factor range must satisfy 0 < factor_min <= factor_max");
        }
        if m.min_quantity_g == 0 || m.add_quantity_g == 0 {
            return invalid("mutation quantities must be positive");
        }
        if !(0.0..=1.0).contains(&m.add_probability)
            || !(0.0..=1.0).contains(&m.remove_probability)
        {
            return invalid("mutation probabilities must be within [0, 1]");
        }
        if !self.balance.min_protein.is_finite() || !self.balance.max_calories.is_finite() {
            return invalid("balance thresholds must be finite");
        }
        Ok(())
    }
}
