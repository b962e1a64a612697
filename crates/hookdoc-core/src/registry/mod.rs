//! The hook documentation registry
//!
//! A [`Registry`] is an ordered, read-only mapping from hook name to
//! [`HookEntry`]. Iteration follows insertion order, which for the built-in
//! catalog is the curated presentation order.

mod catalog;
mod entry;

use std::collections::HashMap;
use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::error::RegistryError;

pub use entry::{is_absolute_url, HookEntry};

/// Immutable ordered collection of hook entries
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<&'static str, HookEntry>,
}

impl Registry {
    /// Build a registry, checking every entry and rejecting duplicate ids.
    ///
    /// Ids that differ only in case (or in characters the anchor folds to
    /// `-`) are rejected too: they would share an HTML anchor and a detail
    /// page path on case-insensitive file systems.
    pub fn from_entries(
        entries: impl IntoIterator<Item = HookEntry>,
    ) -> Result<Self, RegistryError> {
        let entries = entries.into_iter();
        let mut map = IndexMap::with_capacity(entries.size_hint().0);
        let mut anchors: HashMap<String, &'static str> = HashMap::new();

        for entry in entries {
            entry.validate()?;
            if map.insert(entry.id, entry).is_some() {
                return Err(RegistryError::DuplicateId(entry.id.to_string()));
            }
            if let Some(existing) = anchors.insert(entry.anchor(), entry.id) {
                return Err(RegistryError::AnchorCollision {
                    id: entry.id.to_string(),
                    existing: existing.to_string(),
                });
            }
        }

        Ok(Self { entries: map })
    }

    /// The built-in catalog, constructed on first access.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let entries: IndexMap<_, _> = catalog::BUILTIN_HOOKS
                .iter()
                .map(|entry| (entry.id, *entry))
                .collect();
            tracing::debug!(count = entries.len(), "built-in hook registry initialized");
            Registry { entries }
        })
    }

    /// Look up a hook by exact name.
    pub fn get(&self, id: &str) -> Option<&HookEntry> {
        self.entries.get(id)
    }

    /// Every entry, in presentation order.
    pub fn list_all(&self) -> Vec<&HookEntry> {
        self.entries.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HookEntry> {
        self.entries.values()
    }

    /// Hook names in presentation order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-check every entry against the registry invariants.
    pub fn validate(&self) -> Result<(), RegistryError> {
        Self::from_entries(self.entries.values().copied()).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a HookEntry;
    type IntoIter = indexmap::map::Values<'a, &'static str, HookEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
