//! Integration tests for the cookbook engine
//!
//! End-to-end tests that go from the JSON a transport receives to the JSON it returns.
//!
mod common;
use common::*;
use cookbook::prelude::*;
use serde_json::json;

#[test]
fn test_json_entries_to_summary_payload() {
    let entries: Vec<EntryDefinition> =
        serde_json::from_str(BREAKFAST_JSON).expect("Failed to parse entries");
    let cookbook = Cookbook::builder()
        .with_entries(entries)
        .build()
        .expect("Failed to build cookbook");

    let summary = cookbook.summarize("Big Breakfast").unwrap();
    let payload = serde_json::to_value(&summary).unwrap();

    assert_eq!(
        payload,
        json!({
            "name": "Big Breakfast",
            "cookTime": 15,
            "requiredItems": [{ "name": "Egg", "quantity": 3 }]
        })
    );
}

#[test]
fn test_entry_definition_wire_names() {
    let entry: EntryDefinition = serde_json::from_value(json!({
        "type": "ingredient",
        "name": "Beef",
        "cookTime": -3
    }))
    .unwrap();

    assert_eq!(entry.kind, "ingredient");
    assert_eq!(entry.cook_time, Some(-3));
    assert_eq!(entry.required_items, None);

    let err = Cookbook::new().insert(entry).unwrap_err();
    assert_eq!(err.kind(), "negative_cook_time");
}

#[test]
fn test_unknown_type_from_json_is_rejected() {
    let entry: EntryDefinition = serde_json::from_value(json!({
        "type": "Recipe",
        "name": "Shouty",
        "requiredItems": []
    }))
    .unwrap();

    let err = Cookbook::new().insert(entry).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidKind { .. }));
}

#[test]
fn test_stored_entries_serialize_as_tagged_union() {
    let cookbook = breakfast_cookbook();

    assert_eq!(
        serde_json::to_value(cookbook.get("Egg").unwrap()).unwrap(),
        json!({ "type": "ingredient", "name": "Egg", "cookTime": 5 })
    );
    assert_eq!(
        serde_json::to_value(cookbook.get("Omelette").unwrap()).unwrap(),
        json!({
            "type": "recipe",
            "name": "Omelette",
            "requiredItems": [{ "name": "Egg", "quantity": 2 }]
        })
    );
}

#[test]
fn test_every_failure_kind_is_distinguishable() {
    let cookbook = breakfast_cookbook();
    cookbook
        .insert(EntryDefinition::recipe("Loop", [("Loop", 1)]))
        .unwrap();
    cookbook
        .insert(EntryDefinition::recipe("Dangling", [("Nothing", 1)]))
        .unwrap();

    let mut kinds = vec![
        cookbook.normalize("???").unwrap_err().kind(),
        cookbook.summarize("Nope").unwrap_err().kind(),
        cookbook.summarize("Egg").unwrap_err().kind(),
        cookbook.summarize("Loop").unwrap_err().kind(),
        cookbook.summarize("Dangling").unwrap_err().kind(),
    ];
    let mut bad_kind = EntryDefinition::ingredient("Fork", 0);
    bad_kind.kind = "utensil".to_string();
    kinds.push(cookbook.insert(bad_kind).unwrap_err().kind());
    kinds.push(cookbook.insert(EntryDefinition::ingredient("Egg", 1)).unwrap_err().kind());
    kinds.push(
        cookbook
            .insert(EntryDefinition::recipe("Twice", [("Egg", 1), ("Egg", 1)]))
            .unwrap_err()
            .kind(),
    );
    kinds.push(
        cookbook
            .insert(EntryDefinition::ingredient("Ice", -1))
            .unwrap_err()
            .kind(),
    );

    let total = kinds.len();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), total);
}

#[test]
fn test_into_entry_for_custom_request_type() {
    struct PostEntry {
        label: String,
        minutes: Option<i64>,
        parts: Vec<(String, i64)>,
    }

    impl IntoEntry for PostEntry {
        fn into_entry(self) -> EntryDefinition {
            match self.minutes {
                Some(minutes) => EntryDefinition::ingredient(self.label, minutes),
                None => EntryDefinition::recipe(self.label, self.parts),
            }
        }
    }

    let cookbook = Cookbook::new();
    cookbook
        .insert(PostEntry {
            label: "Rice".to_string(),
            minutes: Some(12),
            parts: vec![],
        })
        .unwrap();
    cookbook
        .insert(PostEntry {
            label: "Rice Bowl".to_string(),
            minutes: None,
            parts: vec![("Rice".to_string(), 2)],
        })
        .unwrap();

    assert_eq!(cookbook.summarize("Rice Bowl").unwrap().cook_time, 24);
}
