/// Default number of generate/evaluate cycles before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Minimum similarity for a preference token to select a catalog entry.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// First attempt
// ─────────────────────────────────────────────────────────────────────────────

/// Starting portion for every matched ingredient.
pub const INITIAL_QUANTITY_G: u32 = 100;

/// Matched ingredients beyond this count are ignored.
pub const MAX_INITIAL_INGREDIENTS: usize = 5;

/// Catalog entries (by load order) used when nothing matches.
pub const FALLBACK_INGREDIENT_COUNT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Mutation of a previous attempt
// ─────────────────────────────────────────────────────────────────────────────

/// Portion jitter range, applied multiplicatively.
pub const MUTATION_FACTOR_MIN: f64 = 0.7;
pub const MUTATION_FACTOR_MAX: f64 = 1.3;

/// Jittered portions never drop below this.
pub const MIN_QUANTITY_G: u32 = 20;

/// Chance of appending one ingredient not yet in the recipe.
pub const ADD_PROBABILITY: f64 = 0.5;

/// Starter portion for an appended ingredient.
pub const ADD_QUANTITY_G: u32 = 50;

/// Chance of dropping one ingredient.
pub const REMOVE_PROBABILITY: f64 = 0.3;

/// Removal only happens when the recipe has more ingredients than this.
pub const REMOVE_ABOVE: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Balance rule
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum protein (g) per serving.
pub const MIN_PROTEIN_PER_SERVING: f64 = 10.0;

/// Maximum calories per serving.
pub const MAX_CALORIES_PER_SERVING: f64 = 600.0;
