use std::collections::HashSet;

use assert_float_eq::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use personal_chef_rs::catalog::IngredientCatalog;
use personal_chef_rs::chef::{
    BalanceRule, ChefConfig, MutationConfig, RatcliffObershelp, RecipeGenerator,
    RefinementController, RefinementState, SimilarityKind, evaluate, find_matches,
    jitter_quantities,
};
use personal_chef_rs::models::{IngredientFact, Recipe, RecipeIngredient, round2};

fn example_catalog() -> IngredientCatalog {
    IngredientCatalog::new(vec![
        IngredientFact::new("chicken", 165.0, 31.0, 0.0, 3.6),
        IngredientFact::new("rice", 130.0, 2.7, 28.0, 0.3),
        IngredientFact::new("broccoli", 34.0, 2.8, 7.0, 0.4),
    ])
    .unwrap()
}

fn wide_catalog() -> IngredientCatalog {
    IngredientCatalog::new(vec![
        IngredientFact::new("pasta", 131.0, 5.0, 25.0, 1.1),
        IngredientFact::new("cheese", 402.0, 25.0, 1.3, 33.0),
        IngredientFact::new("tomato", 18.0, 0.9, 3.9, 0.2),
        IngredientFact::new("olive oil", 884.0, 0.0, 0.0, 100.0),
        IngredientFact::new("chicken", 165.0, 31.0, 0.0, 3.6),
        IngredientFact::new("lentils", 116.0, 9.0, 20.0, 0.4),
        IngredientFact::new("spinach", 23.0, 2.9, 3.6, 0.4),
        IngredientFact::new("butter", 717.0, 0.9, 0.1, 81.0),
    ])
    .unwrap()
}

fn controller(
    catalog: &IngredientCatalog,
    max_attempts: u32,
    seed: u64,
) -> RefinementController<'_, SimilarityKind, StdRng> {
    let config = ChefConfig {
        max_attempts,
        ..Default::default()
    };
    RefinementController::new(
        catalog,
        config.matching.similarity,
        config,
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn test_chicken_rice_succeeds_first_attempt() {
    let catalog = example_catalog();
    let outcome = controller(&catalog, 1, 0).run("chicken rice", 2).unwrap();

    assert!(outcome.succeeded);
    assert_eq!(outcome.state, RefinementState::Succeeded);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(
        outcome.recipe.ingredients,
        vec![
            RecipeIngredient::new("chicken", 100),
            RecipeIngredient::new("rice", 100),
        ]
    );
    assert_float_absolute_eq!(outcome.verdict.total.calories, 295.0, 1e-9);
    assert_float_absolute_eq!(outcome.verdict.total.protein, 33.7, 1e-9);
    assert_float_absolute_eq!(outcome.verdict.per_serving.calories, 147.5, 1e-9);
    assert_float_absolute_eq!(outcome.verdict.per_serving.protein, 16.85, 1e-9);
}

#[test]
fn test_unmatched_preferences_fall_back() {
    let catalog = example_catalog();
    let outcome = controller(&catalog, 1, 0).run("xyz", 1).unwrap();

    assert_eq!(
        outcome.recipe.ingredient_names(),
        vec!["chicken", "rice", "broccoli"]
    );
    assert!(outcome.recipe.ingredients.iter().all(|i| i.quantity_g == 100));
    assert_float_absolute_eq!(outcome.verdict.per_serving.calories, 329.0, 1e-9);
    assert_float_absolute_eq!(outcome.verdict.per_serving.protein, 36.5, 1e-9);
    assert!(outcome.verdict.balanced);
    assert_eq!(outcome.recipe.name, "Xyz Recipe Attempt 1");
}

#[test]
fn test_fallback_with_small_catalog() {
    let catalog = IngredientCatalog::new(vec![
        IngredientFact::new("rice", 130.0, 2.7, 28.0, 0.3),
        IngredientFact::new("broccoli", 34.0, 2.8, 7.0, 0.4),
    ])
    .unwrap();
    let generator = RecipeGenerator::new(&catalog, RatcliffObershelp, ChefConfig::default());
    let mut rng = StdRng::seed_from_u64(1);

    let recipe = generator.generate("zzz", 1, 1, None, &mut rng);
    assert_eq!(recipe.ingredient_names(), vec!["rice", "broccoli"]);
}

#[test]
fn test_controller_never_exceeds_budget() {
    let catalog = wide_catalog();
    for seed in 0..40 {
        for max_attempts in [1, 2, 5, 9] {
            let mut cycles = 0;
            let outcome = controller(&catalog, max_attempts, seed)
                .run_with("pasta butter", 1, |_, _, _| cycles += 1)
                .unwrap();

            assert!(cycles <= max_attempts);
            assert_eq!(cycles, outcome.attempts);
            if !outcome.succeeded {
                assert_eq!(outcome.attempts, max_attempts);
                assert_eq!(outcome.state, RefinementState::Exhausted);
            }
        }
    }
}

#[test]
fn test_success_flag_matches_verdict() {
    let catalog = wide_catalog();
    for seed in 0..30 {
        let outcome = controller(&catalog, 5, seed).run("cheese tomato", 3).unwrap();
        assert_eq!(outcome.succeeded, outcome.verdict.balanced);
        let recomputed = evaluate(&outcome.recipe, &catalog, &BalanceRule::default());
        assert_eq!(recomputed, outcome.verdict);
    }
}

#[test]
fn test_per_serving_equals_rounded_total() {
    let catalog = wide_catalog();
    let generator = RecipeGenerator::new(&catalog, RatcliffObershelp, ChefConfig::default());
    let mut rng = StdRng::seed_from_u64(99);

    let mut recipe = generator.generate("pasta cheese spinach", 1, 1, None, &mut rng);
    for attempt in 2..40 {
        let servings = (attempt % 6) + 1;
        recipe = generator.generate("pasta cheese spinach", servings, attempt, Some(&recipe), &mut rng);
        let verdict = evaluate(&recipe, &catalog, &BalanceRule::default());
        let s = servings as f64;

        assert_eq!(verdict.per_serving.calories, round2(verdict.total.calories / s));
        assert_eq!(verdict.per_serving.protein, round2(verdict.total.protein / s));
        assert_eq!(verdict.per_serving.carbs, round2(verdict.total.carbs / s));
        assert_eq!(verdict.per_serving.fat, round2(verdict.total.fat / s));
    }
}

#[test]
fn test_more_protein_source_never_lowers_protein() {
    let catalog = wide_catalog();
    let rule = BalanceRule::default();
    let mut last = f64::MIN;

    for grams in (20..=400).step_by(20) {
        let recipe = Recipe {
            name: "Lentil Pasta Recipe Attempt 1".to_string(),
            servings: 3,
            ingredients: vec![
                RecipeIngredient::new("pasta", 120),
                RecipeIngredient::new("lentils", grams),
            ],
        };
        let protein = evaluate(&recipe, &catalog, &rule).per_serving.protein;
        assert!(protein >= last);
        last = protein;
    }
}

#[test]
fn test_mutation_floor_holds() {
    let config = MutationConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut ingredients = vec![
        RecipeIngredient::new("pasta", 20),
        RecipeIngredient::new("cheese", 25),
        RecipeIngredient::new("tomato", 300),
    ];

    // Repeated shrinking can never push anything under the floor.
    for _ in 0..200 {
        ingredients = jitter_quantities(&ingredients, &config, &mut rng);
        assert!(ingredients.iter().all(|i| i.quantity_g >= 20));
    }
}

#[test]
fn test_matches_are_unique() {
    let catalog = wide_catalog();
    let texts = [
        "pasta pasta pastas",
        "olive oil olive",
        "chicken chiken chickn",
        "spinach butter spinach",
    ];
    for text in texts {
        for kind in [
            SimilarityKind::RatcliffObershelp,
            SimilarityKind::JaroWinkler,
            SimilarityKind::Levenshtein,
        ] {
            let found = find_matches(text, &catalog, 0.6, &kind);
            let names: HashSet<&str> = found.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names.len(), found.len(), "{text} with {kind:?}");
        }
    }
}

#[test]
fn test_recipes_only_reference_catalog_names() {
    let catalog = wide_catalog();
    for seed in 0..20 {
        let mut names = Vec::new();
        controller(&catalog, 8, seed)
            .run_with("pasta butter", 1, |_, recipe, _| {
                names.extend(recipe.ingredients.iter().map(|i| i.name.clone()));
                assert!(recipe.ingredients.iter().all(|i| i.quantity_g > 0));
            })
            .unwrap();
        assert!(names.iter().all(|n| catalog.contains(n)));
    }
}

#[test]
fn test_same_seed_same_outcome() {
    let catalog = wide_catalog();
    let a = controller(&catalog, 6, 1234).run("pasta butter", 1).unwrap();
    let b = controller(&catalog, 6, 1234).run("pasta butter", 1).unwrap();
    assert_eq!(a.recipe, b.recipe);
    assert_eq!(a.attempts, b.attempts);
}
