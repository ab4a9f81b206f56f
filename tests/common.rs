//! Common test utilities for building cookbooks.
use cookbook::prelude::*;

/// The breakfast cookbook used throughout the suites.
///
/// `Big Breakfast` reaches `Egg` both directly and through `Omelette`.
#[allow(dead_code)]
pub fn breakfast_entries() -> Vec<EntryDefinition> {
    vec![
        EntryDefinition::ingredient("Egg", 5),
        EntryDefinition::ingredient("Bread", 2),
        EntryDefinition::ingredient("Butter", 0),
        EntryDefinition::recipe("Omelette", [("Egg", 2)]),
        EntryDefinition::recipe("Buttered Toast", [("Bread", 1), ("Butter", 1)]),
        EntryDefinition::recipe("Big Breakfast", [("Omelette", 1), ("Egg", 1)]),
        EntryDefinition::recipe(
            "Brunch Platter",
            [("Big Breakfast", 2), ("Buttered Toast", 3), ("Butter", 2)],
        ),
    ]
}

#[allow(dead_code)]
pub fn breakfast_cookbook() -> Cookbook {
    Cookbook::builder()
        .with_entries(breakfast_entries())
        .build()
        .expect("breakfast fixture should validate")
}

/// Sum of `cook_time * quantity` over a summary's lines, recomputed from the cookbook.
#[allow(dead_code)]
pub fn expected_cook_time(cookbook: &Cookbook, summary: &Summary) -> u64 {
    summary
        .required_items
        .iter()
        .map(|line| match cookbook.get(&line.name) {
            Some(CookbookEntry::Ingredient(ingredient)) => ingredient.cook_time * line.quantity,
            other => panic!("'{}' resolved to {:?}, expected an ingredient", line.name, other),
        })
        .sum()
}

/// A cookbook JSON document in the camelCase shape a transport receives.
#[allow(dead_code)]
pub const BREAKFAST_JSON: &str = r#"[
    { "type": "ingredient", "name": "Egg", "cookTime": 5 },
    { "type": "recipe", "name": "Omelette", "requiredItems": [{ "name": "Egg", "quantity": 2 }] },
    {
        "type": "recipe",
        "name": "Big Breakfast",
        "requiredItems": [
            { "name": "Omelette", "quantity": 1 },
            { "name": "Egg", "quantity": 1 }
        ]
    }
]"#;
