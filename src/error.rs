use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChefError {
    #[error("Failed to load ingredient catalog from {source_path}: {reason}")]
    CatalogLoad { source_path: String, reason: String },

    #[error("Invalid servings: {0}")]
    InvalidServings(String),

    #[error("Preferences must not be empty")]
    InvalidPreferences,

    #[error("No ingredients available in the catalog")]
    NoIngredientsAvailable,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ChefError {
    pub(crate) fn catalog_load(source_path: impl Into<String>, reason: impl ToString) -> Self {
        ChefError::CatalogLoad {
            source_path: source_path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChefError>;
