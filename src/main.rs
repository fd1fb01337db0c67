use clap::Parser;
use rand::Rng;

use personal_chef_rs::catalog::{IngredientCatalog, load_catalog};
use personal_chef_rs::chef::{ChefConfig, RefinementController, Similarity, score_matches};
use personal_chef_rs::cli::{Cli, Command, RunArgs};
use personal_chef_rs::error::{ChefError, Result};
use personal_chef_rs::interface::{
    display_attempt, display_catalog, display_matches, display_outcome, parse_servings,
    prompt_preferences, prompt_servings, validate_preferences,
};
use personal_chef_rs::logging::init_logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.clone().unwrap_or_default();
    let catalog = load_catalog(&cli.catalog)?;

    match command {
        Command::Cook {
            preferences,
            servings,
            run,
        } => {
            let config = cli.chef_config(Some(&run))?;
            cmd_cook(&catalog, config, &run, &preferences, &servings)
        }
        Command::Interactive { run } => {
            let config = cli.chef_config(Some(&run))?;
            cmd_interactive(&catalog, config, &run)
        }
        Command::Catalog => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Match { text } => {
            let config = cli.chef_config(None)?;
            cmd_match(&catalog, &config, &text)
        }
    }
}

/// Refine one recipe from command-line arguments.
fn cmd_cook(
    catalog: &IngredientCatalog,
    config: ChefConfig,
    run: &RunArgs,
    preferences: &str,
    servings: &str,
) -> Result<()> {
    // Reject bad input before any attempt runs
    let preferences = validate_preferences(preferences)?;
    let servings = parse_servings(servings)?;

    let similarity = config.matching.similarity;
    let mut controller = RefinementController::new(catalog, similarity, config, run.rng());
    cook(&mut controller, &preferences, servings)
}

/// Interactive loop: ask, cook, repeat until "exit".
fn cmd_interactive(catalog: &IngredientCatalog, config: ChefConfig, run: &RunArgs) -> Result<()> {
    println!(" Personal Chef! Type 'exit' to quit.");
    println!();

    let similarity = config.matching.similarity;
    let mut controller = RefinementController::new(catalog, similarity, config, run.rng());

    while let Some(preferences) = prompt_preferences()? {
        let servings = match prompt_servings() {
            Ok(servings) => servings,
            Err(ChefError::InvalidServings(_)) => {
                println!("Please enter a valid number of servings.");
                println!();
                continue;
            }
            Err(e) => return Err(e),
        };

        cook(&mut controller, &preferences, servings)?;
    }

    Ok(())
}

fn cook<S: Similarity, R: Rng>(
    controller: &mut RefinementController<'_, S, R>,
    preferences: &str,
    servings: u32,
) -> Result<()> {
    let outcome = controller.run_with(preferences, servings, |attempt, recipe, verdict| {
        display_attempt(attempt, recipe, verdict);
    })?;

    display_outcome(&outcome);
    Ok(())
}

/// Show fuzzy matches for a preference text.
fn cmd_match(catalog: &IngredientCatalog, config: &ChefConfig, text: &str) -> Result<()> {
    let text = validate_preferences(text)?;
    let threshold = config.matching.threshold;
    let matches = score_matches(&text, catalog, threshold, &config.matching.similarity);

    println!(
        "Matches for '{}' ({:?}, threshold {:.2}):",
        text, config.matching.similarity, threshold
    );
    display_matches(&matches, threshold);
    Ok(())
}
