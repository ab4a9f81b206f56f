//! Flattening of nested recipes into merged ingredient quantities.

use crate::error::ResolutionError;
use crate::recipe::{CookbookEntry, RequirementLine};
use crate::store::EntryStore;
use ahash::{AHashMap, AHashSet};
use tracing::trace;

/// How many recipes may be nested inside one another before resolution gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Walks a recipe's requirement tree against a fixed view of the store.
///
/// A `Resolver` borrows the store for its whole lifetime, so every lookup made
/// during one resolution sees the same entries.
pub struct Resolver<'a> {
    store: &'a EntryStore,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
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

    /// Expands `items` down to ingredients, merging repeated ingredients.
    ///
    /// `visiting` holds the recipes currently being expanded (normally just the
    /// recipe that owns `items`). Reaching one of them again is a cycle. The set
    /// is restored to its original contents before returning.
    ///
    /// The result lists ingredients that appear directly in `items` first, in
    /// their original order, followed by ingredients contributed by sub-recipes
    /// in order of first appearance. Each quantity is the sum over every path
    /// that reaches the ingredient, scaled by the product of the quantities
    /// along that path.
    ///
    /// Each sub-recipe is expanded once per call and reused wherever else it is
    /// required, so shared sub-recipes do not multiply the work.
    pub fn resolve(
        &self,
        items: &[RequirementLine],
        visiting: &mut AHashSet<String>,
    ) -> Result<Vec<RequirementLine>, ResolutionError> {
        let mut expansions = AHashMap::new();
        self.expand(items, visiting, &mut expansions)
            .map(|expansion| expansion.lines)
    }

    fn expand(
        &self,
        items: &[RequirementLine],
        visiting: &mut AHashSet<String>,
        expansions: &mut AHashMap<String, Expansion>,
    ) -> Result<Expansion, ResolutionError> {
        let mut merged = Accumulator::default();
        let mut height = 0;

        // Direct ingredients keep their place ahead of anything an expansion adds.
        for line in items {
            if let Some(CookbookEntry::Ingredient(_)) = self.store.get(&line.name) {
                merged.add(&line.name, line.quantity)?;
            }
        }

        for line in items {
            let entry = self
                .store
                .get(&line.name)
                .ok_or_else(|| ResolutionError::UnknownIngredient(line.name.clone()))?;

            let CookbookEntry::Recipe(recipe) = entry else {
                continue;
            };

            if visiting.contains(&recipe.name) {
                return Err(ResolutionError::CyclicRecipe(recipe.name.clone()));
            }
            let depth = visiting.len();
            if depth >= self.max_depth {
                return Err(ResolutionError::DepthExceeded {
                    name: recipe.name.clone(),
                    limit: self.max_depth,
                });
            }

            // A cached expansion only stands in if it would also fit at this depth;
            // otherwise walk it again so the failure names the same recipe.
            let reusable = expansions
                .get(&recipe.name)
                .is_some_and(|cached| depth + cached.height < self.max_depth);
            if !reusable {
                trace!(recipe = %recipe.name, quantity = line.quantity, "expanding sub-recipe");
                visiting.insert(recipe.name.clone());
                let expansion = self.expand(&recipe.required_items, visiting, expansions);
                visiting.remove(&recipe.name);
                expansions.insert(recipe.name.clone(), expansion?);
            }

            let expansion = &expansions[&recipe.name];
            height = height.max(expansion.height + 1);
            for sub_line in &expansion.lines {
                let quantity = sub_line
                    .quantity
                    .checked_mul(line.quantity)
                    .ok_or_else(|| ResolutionError::QuantityOverflow(sub_line.name.clone()))?;
                merged.add(&sub_line.name, quantity)?;
            }
        }

        Ok(Expansion {
            lines: merged.into_lines(),
            height,
        })
    }
}

/// The unscaled ingredient lines of one recipe.
struct Expansion {
    lines: Vec<RequirementLine>,
    /// Levels of sub-recipes below the recipe, zero when it lists only ingredients.
    height: usize,
}

/// Name-keyed running totals that remember first-appearance order.
#[derive(Default)]
struct Accumulator {
    positions: AHashMap<String, usize>,
    lines: Vec<RequirementLine>,
}

impl Accumulator {
    fn add(&mut self, name: &str, quantity: u64) -> Result<(), ResolutionError> {
        match self.positions.get(name) {
            Some(&position) => {
                let line = &mut self.lines[position];
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| ResolutionError::QuantityOverflow(name.to_string()))?;
            }
            None => {
                self.positions.insert(name.to_string(), self.lines.len());
                self.lines.push(RequirementLine::new(name, quantity));
            }
        }
        Ok(())
    }

    fn into_lines(self) -> Vec<RequirementLine> {
        self.lines
    }
}
