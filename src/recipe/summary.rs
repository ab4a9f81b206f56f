use super::definition::RequirementLine;
use serde::{Deserialize, Serialize};

/// The flattened view of a recipe, built fresh for every request.
///
/// Every line in `required_items` names an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: u64,
    pub required_items: Vec<RequirementLine>,
}

impl Summary {
    /// Quantity of a single ingredient in the summary, if present.
    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.required_items
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.quantity)
    }
}
