use crate::error::{UnknownKindError, ValidationError};
use crate::recipe::{
    CookbookEntry, EntryDefinition, EntryKind, Ingredient, Recipe, RequirementLine,
};
use crate::store::EntryStore;
use itertools::Itertools;

/// Checks a candidate against the store and converts it into a typed entry.
///
/// Rules run in a fixed order and the first failure is returned:
///
/// 1. the type must be `ingredient` or `recipe`
/// 2. the name must not already be taken, whatever its kind
/// 3. a recipe may not list the same required item twice
/// 4. an ingredient needs a cook time, and it may not be negative
/// 5. every recipe quantity must be positive
///
/// Required items are not looked up here, so recipes can be added before the
/// entries they depend on. Nothing is written to the store.
pub fn validate(
    candidate: &EntryDefinition,
    store: &EntryStore,
) -> Result<CookbookEntry, ValidationError> {
    let kind: EntryKind = candidate
        .kind
        .parse()
        .map_err(|UnknownKindError(kind)| ValidationError::InvalidKind {
            name: candidate.name.clone(),
            kind,
        })?;

    if store.contains(&candidate.name) {
        return Err(ValidationError::DuplicateName(candidate.name.clone()));
    }

    match kind {
        EntryKind::Recipe => validate_recipe(candidate).map(CookbookEntry::Recipe),
        EntryKind::Ingredient => validate_ingredient(candidate).map(CookbookEntry::Ingredient),
    }
}

fn validate_recipe(candidate: &EntryDefinition) -> Result<Recipe, ValidationError> {
    let items = candidate.required_items.as_deref().unwrap_or_default();

    if let Some(item) = items.iter().map(|item| item.name.as_str()).duplicates().next() {
        return Err(ValidationError::DuplicateRequirement {
            recipe: candidate.name.clone(),
            item: item.to_string(),
        });
    }

    let required_items = items
        .iter()
        .map(|item| match u64::try_from(item.quantity) {
            Ok(quantity) if quantity > 0 => {
                Ok(RequirementLine::new(item.name.clone(), quantity))
            }
            _ => Err(ValidationError::NonPositiveQuantity {
                recipe: candidate.name.clone(),
                item: item.name.clone(),
                quantity: item.quantity,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Recipe {
        name: candidate.name.clone(),
        required_items,
    })
}

fn validate_ingredient(candidate: &EntryDefinition) -> Result<Ingredient, ValidationError> {
    let cook_time = candidate
        .cook_time
        .ok_or_else(|| ValidationError::MissingCookTime(candidate.name.clone()))?;

    let cook_time = u64::try_from(cook_time).map_err(|_| ValidationError::NegativeCookTime {
        name: candidate.name.clone(),
        cook_time,
    })?;

    Ok(Ingredient {
        name: candidate.name.clone(),
        cook_time,
    })
}
