use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::catalog::IngredientCatalog;
use crate::chef::{ChefConfig, RefinementController};
use crate::error::{ChefError, Result};

/// Configuration for a convergence survey.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Independent runs per preference text.
    pub trials: usize,
    /// Seed of the first run; each later run uses the next seed.
    pub seed: u64,
    pub servings: u32,
    pub preferences: Vec<String>,
    pub chef: ChefConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            seed: 123,
            servings: 2,
            preferences: vec!["chicken rice".to_string()],
            chef: ChefConfig::default(),
        }
    }
}

/// Outcome of a single seeded run.
#[derive(Debug, Clone, Serialize)]
pub struct TrialRecord {
    pub preferences: String,
    pub trial: usize,
    pub seed: u64,
    pub attempts: u32,
    pub succeeded: bool,
    pub ingredients: usize,
    pub calories_per_serving: f64,
    pub protein_per_serving: f64,
}

/// Aggregate over every trial of one preference text.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceSummary {
    pub preferences: String,
    pub trials: usize,
    pub successes: usize,
    pub success_rate: f64,
    pub mean_attempts: f64,
    /// Mean attempts among successful runs; `None` when nothing succeeded.
    pub mean_attempts_to_success: Option<f64>,
}

impl PreferenceSummary {
    pub fn from_trials(preferences: &str, trials: &[TrialRecord]) -> Self {
        let n = trials.len();
        let successes: Vec<&TrialRecord> = trials.iter().filter(|t| t.succeeded).collect();
        let total_attempts: u32 = trials.iter().map(|t| t.attempts).sum();
        let success_attempts: u32 = successes.iter().map(|t| t.attempts).sum();

        Self {
            preferences: preferences.to_string(),
            trials: n,
            successes: successes.len(),
            success_rate: if n > 0 {
                successes.len() as f64 / n as f64
            } else {
                0.0
            },
            mean_attempts: if n > 0 {
                total_attempts as f64 / n as f64
            } else {
                0.0
            },
            mean_attempts_to_success: if successes.is_empty() {
                None
            } else {
                Some(success_attempts as f64 / successes.len() as f64)
            },
        }
    }
}

/// Results from a survey run.
pub struct SurveyResults {
    /// Every trial, grouped by preference text in input order.
    pub trials: Vec<TrialRecord>,
    pub summaries: Vec<PreferenceSummary>,
}

/// Run `trials` seeded refinement runs for each preference text.
pub fn run_survey(config: &SurveyConfig, catalog: &IngredientCatalog) -> Result<SurveyResults> {
    if config.trials == 0 {
        return Err(ChefError::InvalidConfig(
            "survey needs at least one trial".to_string(),
        ));
    }
    config.chef.validate()?;

    let mut trials = Vec::with_capacity(config.trials * config.preferences.len());
    let mut summaries = Vec::with_capacity(config.preferences.len());
    let mut seed = config.seed;

    for preferences in &config.preferences {
        info!(preferences = %preferences, trials = config.trials, "surveying");
        let start = trials.len();

        for trial in 0..config.trials {
            let rng = StdRng::seed_from_u64(seed);
            let mut controller = RefinementController::new(
                catalog,
                config.chef.matching.similarity,
                config.chef.clone(),
                rng,
            );
            let outcome = controller.run(preferences, config.servings)?;

            trials.push(TrialRecord {
                preferences: preferences.clone(),
                trial: trial + 1,
                seed,
                attempts: outcome.attempts,
                succeeded: outcome.succeeded,
                ingredients: outcome.recipe.ingredients.len(),
                calories_per_serving: outcome.verdict.per_serving.calories,
                protein_per_serving: outcome.verdict.per_serving.protein,
            });
            seed = seed.wrapping_add(1);
        }

        let summary = PreferenceSummary::from_trials(preferences, &trials[start..]);
        info!(
            preferences = %preferences,
            success_rate = summary.success_rate,
            mean_attempts = summary.mean_attempts,
            "survey complete"
        );
        summaries.push(summary);
    }

    Ok(SurveyResults { trials, summaries })
}
