use crate::error::UnknownKindError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of entry a cookbook can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Ingredient => "ingredient",
            EntryKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = UnknownKindError;

    /// Only the exact lowercase wire names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(EntryKind::Ingredient),
            "recipe" => Ok(EntryKind::Recipe),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

/// A `(name, quantity)` pair referencing another entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementLine {
    pub name: String,
    pub quantity: u64,
}

impl RequirementLine {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// An atomic entry with a fixed preparation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A composite entry built from quantified sub-items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequirementLine>,
}

/// A validated entry as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CookbookEntry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl CookbookEntry {
    pub fn name(&self) -> &str {
        match self {
            CookbookEntry::Ingredient(ingredient) => &ingredient.name,
            CookbookEntry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CookbookEntry::Ingredient(_) => EntryKind::Ingredient,
            CookbookEntry::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            CookbookEntry::Ingredient(ingredient) => Some(ingredient),
            CookbookEntry::Recipe(_) => None,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            CookbookEntry::Recipe(recipe) => Some(recipe),
            CookbookEntry::Ingredient(_) => None,
        }
    }
}

impl From<Ingredient> for CookbookEntry {
    fn from(ingredient: Ingredient) -> Self {
        CookbookEntry::Ingredient(ingredient)
    }
}

impl From<Recipe> for CookbookEntry {
    fn from(recipe: Recipe) -> Self {
        CookbookEntry::Recipe(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_exact() {
        assert_eq!("recipe".parse::<EntryKind>(), Ok(EntryKind::Recipe));
        assert_eq!("ingredient".parse::<EntryKind>(), Ok(EntryKind::Ingredient));
        assert_eq!(
            "Recipe".parse::<EntryKind>(),
            Err(UnknownKindError("Recipe".to_string()))
        );
    }
}
