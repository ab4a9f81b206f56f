use crate::error::{NormalizationError, SummaryError, ValidationError};
use crate::normalize;
use crate::recipe::{CookbookEntry, EntryDefinition, IntoEntry, Summary};
use crate::resolver::DEFAULT_MAX_DEPTH;
use crate::store::EntryStore;
use crate::summary::SummaryBuilder;
use crate::validator;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// The shared cookbook a process serves requests from.
///
/// Every insertion holds the write lock across validation and storage, and
/// every summary holds the read lock for the whole resolution, so a summary
/// never observes a store that is halfway through changing.
pub struct Cookbook {
    store: RwLock<EntryStore>,
    max_depth: usize,
}

pub struct CookbookBuilder {
    max_depth: usize,
    entries: Vec<EntryDefinition>,
}

impl CookbookBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            entries: Vec::new(),
        }
    }

    /// Limits how deeply recipes may nest before a summary fails.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Queues entries to be inserted, in order, when the cookbook is built.
    pub fn with_entries<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoEntry,
    {
        self.entries
            .extend(entries.into_iter().map(IntoEntry::into_entry));
        self
    }

    /// Builds the cookbook, failing on the first queued entry that does not validate.
    pub fn build(self) -> Result<Cookbook, ValidationError> {
        let cookbook = Cookbook {
            store: RwLock::new(EntryStore::new()),
            max_depth: self.max_depth,
        };
        for entry in self.entries {
            cookbook.insert(entry)?;
        }
        Ok(cookbook)
    }
}

impl Default for CookbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Cookbook {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(EntryStore::new()),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn builder() -> CookbookBuilder {
        CookbookBuilder::new()
    }

    /// Cleans up a hand-written name. Does not touch the store.
    pub fn normalize(&self, raw: &str) -> Result<String, NormalizationError> {
        normalize::normalize(raw)
    }

    /// Validates `entry` and adds it to the store.
    pub fn insert(&self, entry: impl IntoEntry) -> Result<(), ValidationError> {
        let candidate = entry.into_entry();
        let mut store = self.write();

        let validated = validator::validate(&candidate, &store).inspect_err(|e| {
            warn!(name = %candidate.name, kind = e.kind(), "rejected cookbook entry: {}", e);
        })?;
        let kind = validated.kind();
        store.insert(validated)?;

        debug!(name = %candidate.name, %kind, entries = store.len(), "inserted cookbook entry");
        Ok(())
    }

    /// Flattens the recipe called `name` into ingredients and a total cook time.
    pub fn summarize(&self, name: &str) -> Result<Summary, SummaryError> {
        let store = self.read();
        SummaryBuilder::new(&store)
            .with_max_depth(self.max_depth)
            .summarize(name)
            .inspect_err(|e| debug!(name, kind = e.kind(), "summary failed: {}", e))
    }

    /// Returns a copy of the stored entry, if any.
    pub fn get(&self, name: &str) -> Option<CookbookEntry> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A copy of every entry in insertion order.
    pub fn entries(&self) -> Vec<CookbookEntry> {
        self.read().iter().cloned().collect()
    }

    // The store is only ever changed by a single `insert` call after all
    // checks have passed, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, EntryStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EntryStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Cookbook {
    fn default() -> Self {
        Self::new()
    }
}
