use std::collections::HashMap;

use crate::error::{ChefError, Result};
use crate::models::IngredientFact;

/// Read-only ingredient reference data.
///
/// Keeps load order (used for deterministic fallbacks) plus an exact-name index.
/// There is no mutation API, so a loaded catalog can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    facts: Vec<IngredientFact>,
    index: HashMap<String, usize>,
}

impl IngredientCatalog {
    /// Build a catalog, rejecting invalid facts and duplicate names.
    pub fn new(facts: Vec<IngredientFact>) -> Result<Self> {
        let mut index = HashMap::with_capacity(facts.len());
        for (i, fact) in facts.iter().enumerate() {
            if !fact.is_valid() {
                return Err(ChefError::catalog_load(
                    "<memory>",
                    format!("invalid ingredient record: {}", fact.debug_string()),
                ));
            }
            if index.insert(fact.name.clone(), i).is_some() {
                return Err(ChefError::catalog_load(
                    "<memory>",
                    format!("duplicate ingredient name: {}", fact.name),
                ));
            }
        }
        Ok(Self { facts, index })
    }

    /// Exact (case-sensitive) lookup by name.
    pub fn get(&self, name: &str) -> Option<&IngredientFact> {
        self.index.get(name).map(|&i| &self.facts[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All facts in load order.
    pub fn all(&self) -> &[IngredientFact] {
        &self.facts
    }

    /// The first `n` entries in load order (fewer if the catalog is smaller).
    pub fn first(&self, n: usize) -> &[IngredientFact] {
        &self.facts[..n.min(self.facts.len())]
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_facts() -> Vec<IngredientFact> {
        vec![
            IngredientFact::new("chicken", 165.0, 31.0, 0.0, 3.6),
            IngredientFact::new("rice", 130.0, 2.7, 28.0, 0.3),
            IngredientFact::new("broccoli", 34.0, 2.8, 7.0, 0.4),
        ]
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = IngredientCatalog::new(sample_facts()).unwrap();
        assert!(catalog.get("rice").is_some());
        assert!(catalog.get("Rice").is_none());
        assert!(catalog.contains("broccoli"));
        assert!(!catalog.contains("salmon"));
    }

    #[test]
    fn test_preserves_load_order() {
        let catalog = IngredientCatalog::new(sample_facts()).unwrap();
        let names: Vec<&str> = catalog.all().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["chicken", "rice", "broccoli"]);
        assert_eq!(catalog.first(2).len(), 2);
        assert_eq!(catalog.first(10).len(), 3);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut facts = sample_facts();
        facts.push(IngredientFact::new("rice", 1.0, 1.0, 1.0, 1.0));
        let err = IngredientCatalog::new(facts).unwrap_err();
        assert!(matches!(err, ChefError::CatalogLoad { .. }));
    }

    #[test]
    fn test_rejects_invalid_fact() {
        let facts = vec![IngredientFact::new("oil", 884.0, 0.0, 0.0, -100.0)];
        assert!(IngredientCatalog::new(facts).is_err());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = IngredientCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.first(3).is_empty());
    }
}
