use super::JournalStore;
use crate::error::Result;
use crate::journal::Journal;

/// Placeholder persistence. Every save succeeds and nothing is written.
///
/// The stub reports nothing itself; the caller announces a successful save
/// (see `commands::journal::SAVE_COMPLETED`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StubStore;

impl StubStore {
    pub fn new() -> Self {
        Self
    }
}

impl JournalStore for StubStore {
    fn save_journal(
        &mut self,
        _journal: &Journal,
        _destination: &str,
        _overwrite: bool,
    ) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_always_succeeds() {
        let mut store = StubStore::new();
        let mut journal = Journal::new();
        journal.add_entry("first");

        store.save_journal(&journal, "adfaf/fasdf", false).unwrap();
        store.save_journal(&journal, "adfaf/fasdf", false).unwrap();
        store.save_journal(&Journal::new(), "", true).unwrap();
    }

    #[test]
    fn save_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("journal.txt");

        let mut store = StubStore::new();
        store
            .save_journal(&Journal::new(), destination.to_str().unwrap(), true)
            .unwrap();

        assert!(!destination.exists());
    }
}
