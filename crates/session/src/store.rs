//! High-score storage capability.
//!
//! The round only needs to read one named integer at start and maybe write it
//! at the end. How that value is persisted belongs to the host; this module
//! defines the seam and an in-memory implementation.

use std::collections::HashMap;

/// Named integer store
pub trait HighScoreStore {
    /// Stored value for `key`, `None` if never written
    fn load(&self, key: &str) -> Option<u32>;

    fn save(&mut self, key: &str, value: u32);
}

/// Store backed by a `HashMap`, lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn load(&self, key: &str) -> Option<u32> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: u32) {
        (**self).save(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("HighScore"), None);
        store.save("HighScore", 42);
        assert_eq!(store.load("HighScore"), Some(42));
        assert_eq!(store.load("Other"), None);
    }

    fn overwrite<S: HighScoreStore>(mut store: S) {
        store.save("HighScore", 9);
    }

    #[test]
    fn test_store_through_mut_ref() {
        let mut store = MemoryStore::with_value("HighScore", 5);
        overwrite(&mut store);
        assert_eq!(store.load("HighScore"), Some(9));
    }
}
