//! Read-only configuration stores backing configured defaults.
//!
//! The resolver only needs a `get(section, key)` capability; the persisted
//! file format is deliberately thin. Stores are never written to by this
//! crate.

use std::collections::BTreeMap;

mod file;

pub use file::FileStore;


pub(crate) type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Read-only section-keyed value store.
///
/// Implementations must behave as pure reads: within one invocation, looking
/// a key up twice returns the same answer.
pub trait ConfigStore {
    /// Returns the value stored under `section` and `key`, or `None` when
    /// absent.
    fn get(&self, section: &str, key: &str) -> Option<String>;
}

/// In-memory [`ConfigStore`] for tests and programmatically supplied
/// defaults.
///
/// # Examples
///
/// ```rust
/// use tacit_config::{ConfigStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("defaults", "group", "myRG");
/// assert_eq!(store.get("defaults", "group").as_deref(), Some("myRG"));
/// assert_eq!(store.get("defaults", "location"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sections: Sections,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value under the same key.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_owned())
            .or_default()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.sections.get(section)?.get(key).cloned()
    }
}
