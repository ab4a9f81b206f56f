//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the cookbook crate.
//!
//! # Example
//!
//! ```rust
//! use cookbook::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let cookbook = Cookbook::builder()
//!     .with_entries([
//!         EntryDefinition::ingredient("Bread", 2),
//!         EntryDefinition::recipe("Toast", [("Bread", 2)]),
//!     ])
//!     .build()?;
//!
//! let summary = cookbook.summarize("Toast")?;
//! println!("{} takes {} minutes", summary.name, summary.cook_time);
//! # Ok(())
//! # }
//! ```

// Engine facade
pub use crate::cookbook::{Cookbook, CookbookBuilder};

// Data model
pub use crate::recipe::{
    CookbookEntry, EntryDefinition, EntryKind, Ingredient, IntoEntry, Recipe,
    RequirementDefinition, RequirementLine, Summary,
};

// Error types
pub use crate::error::{
    NormalizationError, ResolutionError, SummaryError, UnknownKindError, ValidationError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
