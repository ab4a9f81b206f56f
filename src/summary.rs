use crate::error::SummaryError;
use crate::recipe::{CookbookEntry, Summary};
use crate::resolver::{DEFAULT_MAX_DEPTH, Resolver};
use crate::store::EntryStore;
use ahash::AHashSet;
use tracing::debug;

/// Builds [`Summary`] values for recipes held in a store.
pub struct SummaryBuilder<'a> {
    store: &'a EntryStore,
    max_depth: usize,
}

impl<'a> SummaryBuilder<'a> {
    pub fn new(store: &'a EntryStore) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolves the recipe called `name` and totals its cook time.
    ///
    /// The stored recipe is only read. The cook time is the sum of each resolved
    /// ingredient's own cook time multiplied by its resolved quantity.
    pub fn summarize(&self, name: &str) -> Result<Summary, SummaryError> {
        let recipe = match self.store.get(name) {
            None => return Err(SummaryError::NotFound(name.to_string())),
            Some(CookbookEntry::Ingredient(_)) => {
                return Err(SummaryError::NotARecipe(name.to_string()));
            }
            Some(CookbookEntry::Recipe(recipe)) => recipe,
        };

        let mut visiting = AHashSet::new();
        visiting.insert(recipe.name.clone());

        let required_items = Resolver::new(self.store)
            .with_max_depth(self.max_depth)
            .resolve(&recipe.required_items, &mut visiting)?;

        let mut cook_time: u64 = 0;
        for line in &required_items {
            let ingredient = self
                .store
                .get(&line.name)
                .and_then(CookbookEntry::as_ingredient)
                .ok_or_else(|| SummaryError::MissingIngredient(line.name.clone()))?;

            cook_time = ingredient
                .cook_time
                .checked_mul(line.quantity)
                .and_then(|time| cook_time.checked_add(time))
                .ok_or_else(|| SummaryError::CookTimeOverflow(line.name.clone()))?;
        }

        debug!(
            recipe = %recipe.name,
            ingredients = required_items.len(),
            cook_time,
            "summarized recipe"
        );

        Ok(Summary {
            name: recipe.name.clone(),
            cook_time,
            required_items,
        })
    }
}
