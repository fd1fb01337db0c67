use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::round2;
use crate::survey::runner::{PreferenceSummary, SurveyResults, TrialRecord};

/// Write every trial to a CSV file.
pub fn write_csv(trials: &[TrialRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "preferences",
        "trial",
        "seed",
        "attempts",
        "succeeded",
        "ingredients",
        "calories_per_serving",
        "protein_per_serving",
    ])?;

    for t in trials {
        wtr.write_record([
            t.preferences.clone(),
            t.trial.to_string(),
            t.seed.to_string(),
            t.attempts.to_string(),
            t.succeeded.to_string(),
            t.ingredients.to_string(),
            format!("{:.2}", t.calories_per_serving),
            format!("{:.2}", t.protein_per_serving),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write per-preference summaries to a JSON file.
pub fn write_summary_json(results: &SurveyResults, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "total_trials": results.trials.len(),
        "summaries": results.summaries.iter().map(|s| {
            serde_json::json!({
                "preferences": s.preferences,
                "trials": s.trials,
                "successes": s.successes,
                "success_rate": round2(s.success_rate),
                "mean_attempts": round2(s.mean_attempts),
                "mean_attempts_to_success": s.mean_attempts_to_success.map(round2),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print summaries to stdout.
pub fn print_summary(summaries: &[PreferenceSummary]) {
    println!("\n=== Convergence Survey ===\n");

    for s in summaries {
        let to_success = s
            .mean_attempts_to_success
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "'{}': {}/{} balanced ({:.1}%), mean attempts {:.2}, to success {}",
            s.preferences,
            s.successes,
            s.trials,
            s.success_rate * 100.0,
            s.mean_attempts,
            to_success
        );
    }
    println!();
}
