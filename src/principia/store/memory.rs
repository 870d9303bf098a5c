use super::JournalStore;
use crate::error::{PrincipiaError, Result};
use crate::journal::Journal;
use std::collections::HashMap;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshots: HashMap<String, Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries as they were at the last save to `destination`.
    pub fn snapshot(&self, destination: &str) -> Option<&[String]> {
        self.snapshots.get(destination).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl JournalStore for InMemoryStore {
    fn save_journal(
        &mut self,
        journal: &Journal,
        destination: &str,
        overwrite: bool,
    ) -> Result<()> {
        if destination.is_empty() {
            return Err(PrincipiaError::Store("Destination cannot be empty".into()));
        }
        if !overwrite && self.snapshots.contains_key(destination) {
            return Err(PrincipiaError::AlreadySaved(destination.to_string()));
        }
        self.snapshots
            .insert(destination.to_string(), journal.entries().to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_saved_journal(mut self, destination: &str, entries: &[&str]) -> Self {
            let mut journal = Journal::new();
            for entry in entries {
                journal.add_entry(*entry);
            }
            self.store
                .save_journal(&journal, destination, false)
                .unwrap();
            self
        }
    }
}
