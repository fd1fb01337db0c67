use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chef::{ChefConfig, SimilarityKind};
use crate::error::Result;

/// Personal Chef: builds a recipe from your cravings and refines it until it is balanced.
#[derive(Parser, Debug)]
#[command(name = "personal_chef")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient catalog (.json or .csv).
    #[arg(short, long, default_value = "ingredients.json", global = true)]
    pub catalog: PathBuf,

    /// Optional JSON file overriding refinement settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// String similarity used to match preferences to ingredients.
    #[arg(long, value_enum, global = true)]
    pub similarity: Option<SimilarityKind>,

    /// Minimum similarity for a match (0.0 to 1.0).
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate and refine a single recipe.
    Cook {
        /// What you want to eat, e.g. "chicken rice".
        #[arg(short, long)]
        preferences: String,

        /// Number of servings (positive whole number).
        #[arg(short, long)]
        servings: String,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Ask for requests in a loop until "exit".
    Interactive {
        #[command(flatten)]
        run: RunArgs,
    },

    /// List the ingredient catalog.
    Catalog,

    /// Show which catalog entries a preference text matches.
    Match {
        /// Preference text to match.
        text: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive {
            run: RunArgs::default(),
        }
    }
}

/// Options shared by commands that run the refinement loop.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Maximum refinement attempts.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seed for reproducible mutations.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Cli {
    /// Effective configuration: file (or defaults), then command-line overrides.
    pub fn chef_config(&self, run: Option<&RunArgs>) -> Result<ChefConfig> {
        let mut config = match &self.config {
            Some(path) => ChefConfig::from_file(path)?,
            None => ChefConfig::default(),
        };

        if let Some(similarity) = self.similarity {
            config.matching.similarity = similarity;
        }
        if let Some(threshold) = self.threshold {
            config.matching.threshold = threshold;
        }
        if let Some(max_attempts) = run.and_then(|r| r.max_attempts) {
            config.max_attempts = max_attempts;
        }

        config.validate()?;
        Ok(config)
    }
}
