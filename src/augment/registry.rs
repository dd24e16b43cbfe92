//! Name-keyed store of augment templates.
//!
//! The content loader registers one template per augment definition at
//! startup; equipment records then request instances by name. An
//! instance is an aliasing clone of the template, so every item wearing
//! "vampirism" shares the template's rule storage.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::bundle::Augment;

/// Registry of augment templates, keyed by name.
///
/// ## Example
///
/// ```
/// use combat_augments::augment::{Augment, AugmentRegistry};
///
/// let mut registry = AugmentRegistry::new();
/// registry.insert(Augment::new("vampirism"));
///
/// let instance = registry.instantiate("vampirism").unwrap();
/// assert_eq!(instance.name(), "vampirism");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AugmentRegistry {
    augments: FxHashMap<String, Augment>,
}

impl AugmentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under its own name.
    ///
    /// A duplicate name keeps the existing template and returns
    /// `false` with a diagnostic; content packs should not silently
    /// shadow each other.
    pub fn insert(&mut self, augment: Augment) -> bool {
        let name = augment.name().to_owned();
        match self.augments.entry(name) {
            std::collections::hash_map::Entry::Occupied(_) => {
                warn!(name = augment.name(), "augment already registered, keeping existing");
                false
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(augment);
                true
            }
        }
    }

    /// Remove a template. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) {
        self.augments.remove(name);
    }

    /// Drop all templates (content reload).
    pub fn clear(&mut self) {
        self.augments.clear();
    }

    /// Hand out an instance of the named template.
    ///
    /// The instance shares the template's modifier list; warns and
    /// returns `None` for an unknown name.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Option<Augment> {
        match self.augments.get(name) {
            Some(template) => Some(template.clone()),
            None => {
                warn!(name, "no augment registered under this name");
                None
            }
        }
    }

    /// Borrow a template without instantiating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Augment> {
        self.augments.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.augments.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.augments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.augments.is_empty()
    }

    /// Iterate over all registered templates.
    pub fn iter(&self) -> impl Iterator<Item = &Augment> {
        self.augments.values()
    }
}
