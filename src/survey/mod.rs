pub mod output;
pub mod runner;

pub use output::{print_summary, write_csv, write_summary_json};
pub use runner::{PreferenceSummary, SurveyConfig, SurveyResults, TrialRecord, run_survey};
