use serde::{Deserialize, Serialize};

/// An unvalidated entry exactly as a caller submitted it.
///
/// The fields overlap on purpose: a candidate may claim any `type` and carry
/// either payload (or both). [`crate::validator::validate`] is what turns it into
/// a well-formed [`CookbookEntry`](super::CookbookEntry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_items: Option<Vec<RequirementDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,
}

/// A requirement line before its quantity has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub name: String,
    pub quantity: i64,
}

impl RequirementDefinition {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl EntryDefinition {
    /// Shorthand for an ingredient candidate.
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            name: name.into(),
            kind: "ingredient".to_string(),
            required_items: None,
            cook_time: Some(cook_time),
        }
    }

    /// Shorthand for a recipe candidate from `(name, quantity)` pairs.
    pub fn recipe<N: Into<String>>(
        name: impl Into<String>,
        items: impl IntoIterator<Item = (N, i64)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: "recipe".to_string(),
            required_items: Some(
                items
                    .into_iter()
                    .map(|(item, quantity)| RequirementDefinition::new(item, quantity))
                    .collect(),
            ),
            cook_time: None,
        }
    }
}

/// A trait for caller-side data models that can be converted into an `EntryDefinition`.
///
/// Transports and loaders implement this on their own request structs so the
/// engine never has to know about their wire format.
///
/// # Example
///
/// ```rust
/// use cookbook::recipe::{EntryDefinition, IntoEntry};
///
/// struct PantryRow { label: String, minutes: i64 }
///
/// impl IntoEntry for PantryRow {
///     fn into_entry(self) -> EntryDefinition {
///         EntryDefinition::ingredient(self.label, self.minutes)
///     }
/// }
///
/// let entry = PantryRow { label: "Egg".to_string(), minutes: 5 }.into_entry();
/// assert_eq!(entry.cook_time, Some(5));
/// ```
pub trait IntoEntry {
    /// Consumes the object and converts it into a cookbook candidate.
    fn into_entry(self) -> EntryDefinition;
}

impl IntoEntry for EntryDefinition {
    fn into_entry(self) -> EntryDefinition {
        self
    }
}
