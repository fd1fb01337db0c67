use std::path::PathBuf;

use clap::{ArgAction, Parser};

use personal_chef_rs::catalog::load_catalog;
use personal_chef_rs::chef::{ChefConfig, SimilarityKind};
use personal_chef_rs::interface::parse_servings;
use personal_chef_rs::logging::init_logging;
use personal_chef_rs::survey::{
    SurveyConfig, print_summary, run_survey, write_csv, write_summary_json,
};

#[derive(Parser, Debug)]
#[command(name = "survey")]
#[command(about = "Measure how often the recipe refinement loop finds a balanced meal")]
struct Args {
    /// Seeded runs per preference text
    #[arg(long, default_value = "200")]
    trials: usize,

    /// Seed of the first run
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Servings per recipe
    #[arg(long, default_value = "2")]
    servings: String,

    /// Preference texts to survey (comma-separated)
    #[arg(long, default_value = "chicken rice")]
    preferences: String,

    /// Path to the ingredient catalog
    #[arg(long, default_value = "ingredients.json")]
    catalog: PathBuf,

    /// Optional JSON refinement config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the attempt budget
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Override the similarity scorer
    #[arg(long, value_enum)]
    similarity: Option<SimilarityKind>,

    /// Output CSV file for all trials
    #[arg(long, default_value = "survey_trials.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "survey_summary.json")]
    json: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_preferences(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} ingredients from {:?}", catalog.len(), args.catalog);

    let mut chef = match &args.config {
        Some(path) => match ChefConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ChefConfig::default(),
    };
    if let Some(max_attempts) = args.max_attempts {
        chef.max_attempts = max_attempts;
    }
    if let Some(similarity) = args.similarity {
        chef.matching.similarity = similarity;
    }

    let servings = match parse_servings(&args.servings) {
        Ok(servings) => servings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let preferences = parse_preferences(&args.preferences);
    if preferences.is_empty() {
        eprintln!("Error: no preference texts provided");
        std::process::exit(1);
    }
    println!(
        "Surveying {:?} with {} trials each (max {} attempts)",
        preferences, args.trials, chef.max_attempts
    );

    let config = SurveyConfig {
        trials: args.trials,
        seed: args.seed,
        servings,
        preferences,
        chef,
    };

    let results = match run_survey(&config, &catalog) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&results.summaries);

    if let Err(e) = write_csv(&results.trials, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all trials to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&results, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
