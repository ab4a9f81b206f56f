//! Tests for sharing one cookbook between threads.
mod common;
use common::*;
use cookbook::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_cookbook_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cookbook>();
}

#[test]
fn test_racing_inserts_of_same_name_admit_one() {
    let cookbook = Cookbook::new();

    let outcomes: Vec<std::result::Result<(), ValidationError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cookbook = &cookbook;
                scope.spawn(move || cookbook.insert(EntryDefinition::ingredient("Saffron", i)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == ValidationError::DuplicateName("Saffron".to_string()))
    );
    assert_eq!(cookbook.len(), 1);
}

#[test]
fn test_summaries_stay_consistent_during_inserts() {
    let cookbook = Arc::new(breakfast_cookbook());

    let writer = {
        let cookbook = Arc::clone(&cookbook);
        thread::spawn(move || {
            for i in 0..200 {
                cookbook
                    .insert(EntryDefinition::ingredient(format!("Spice {}", i), i))
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cookbook = Arc::clone(&cookbook);
            thread::spawn(move || {
                for _ in 0..200 {
                    let summary = cookbook.summarize("Brunch Platter").unwrap();
                    assert_eq!(summary.cook_time, 36);
                    assert_eq!(summary.required_items.len(), 3);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(cookbook.len(), breakfast_entries().len() + 200);
}

#[test]
fn test_late_dependency_becomes_visible() {
    let cookbook = Arc::new(Cookbook::new());
    cookbook
        .insert(EntryDefinition::recipe("Tea", [("Leaves", 1), ("Water", 2)]))
        .unwrap();
    cookbook.insert(EntryDefinition::ingredient("Water", 1)).unwrap();

    let before = cookbook.summarize("Tea").unwrap_err();
    assert_eq!(before.kind(), "unknown_ingredient");

    let inserter = {
        let cookbook = Arc::clone(&cookbook);
        thread::spawn(move || cookbook.insert(EntryDefinition::ingredient("Leaves", 3)))
    };
    inserter.join().unwrap().unwrap();

    let summary = cookbook.summarize("Tea").unwrap();
    assert_eq!(summary.cook_time, 5);
}
