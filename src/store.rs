use crate::error::ValidationError;
use crate::recipe::CookbookEntry;
use ahash::AHashMap;

/// Position of an entry inside the store's arena.
pub type EntryId = usize;

/// Keyed container for every validated cookbook entry.
///
/// Entries live in an append-only arena and are found through a name index.
/// There is no update or delete: once a name is taken it stays taken.
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: Vec<CookbookEntry>,
    index: AHashMap<String, EntryId>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&CookbookEntry> {
        self.index.get(name).map(|&id| &self.entries[id])
    }

    /// Appends an entry that has already passed validation.
    ///
    /// The name check is repeated here so the uniqueness invariant cannot be
    /// broken by a caller that skips the validator.
    pub fn insert(&mut self, entry: CookbookEntry) -> Result<EntryId, ValidationError> {
        if self.contains(entry.name()) {
            return Err(ValidationError::DuplicateName(entry.name().to_string()));
        }
        let id = self.entries.len();
        self.index.insert(entry.name().to_string(), id);
        self.entries.push(entry);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CookbookEntry> {
        self.entries.iter()
    }
}
