//! # Cookbook - Recipe Resolution Engine
//!
//! **Cookbook** is a small in-memory registry of named entries. Each entry is either an
//! *ingredient* with a fixed cook time, or a *recipe* built from quantified sub-items that
//! can themselves be ingredients or other recipes.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Entries**: Build [`recipe::EntryDefinition`] candidates directly, or
//!     implement [`recipe::IntoEntry`] on your own request types.
//! 2.  **Insert**: [`Cookbook::insert`] validates each candidate and stores it. Recipes may
//!     be inserted before the entries they depend on.
//! 3.  **Summarize**: [`Cookbook::summarize`] expands a recipe down to ingredients, merges
//!     ingredients reached through different branches and totals the cook time.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookbook::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let cookbook = Cookbook::new();
//! cookbook.insert(EntryDefinition::ingredient("Egg", 5))?;
//! cookbook.insert(EntryDefinition::recipe("Omelette", [("Egg", 2)]))?;
//! cookbook.insert(EntryDefinition::recipe(
//!     "Big Breakfast",
//!     [("Omelette", 1), ("Egg", 1)],
//! ))?;
//!
//! let summary = cookbook.summarize("Big Breakfast")?;
//! assert_eq!(summary.cook_time, 15);
//! assert_eq!(summary.required_items, vec![RequirementLine::new("Egg", 3)]);
//!
//! assert_eq!(cookbook.normalize("big_breakfast!!")?, "Big Breakfast");
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber itself.

pub mod cookbook;
pub mod error;
pub mod normalize;
pub mod prelude;
pub mod recipe;
pub mod resolver;
pub mod store;
pub mod summary;
pub mod validator;

pub use cookbook::{Cookbook, CookbookBuilder};
