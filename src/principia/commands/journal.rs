use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::store::JournalStore;

pub const SAVE_COMPLETED: &str = "Save is completed";

/// What to do with a fresh journal: entries to add, positions to remove
/// (one at a time, in order), and where to save the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalScript {
    pub entries: Vec<String>,
    /// Signed because positions come straight from user input. Negative
    /// positions are out of range like any other.
    pub removals: Vec<i64>,
    pub destination: String,
    pub overwrite: bool,
}

impl JournalScript {
    pub fn new(entries: Vec<String>, destination: impl Into<String>) -> Self {
        Self {
            entries,
            removals: Vec::new(),
            destination: destination.into(),
            overwrite: false,
        }
    }

    /// Add "first" and "second", then remove position 1.
    pub fn demo(destination: impl Into<String>) -> Self {
        Self::new(vec!["first".into(), "second".into()], destination).with_removals(vec![1])
    }

    pub fn with_removals(mut self, removals: Vec<i64>) -> Self {
        self.removals = removals;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

pub fn run<S: JournalStore>(store: &mut S, script: &JournalScript) -> Result<CmdResult> {
    let mut journal = Journal::new();
    let mut result = CmdResult::default();

    for entry in &script.entries {
        journal.add_entry(entry.as_str());
    }
    result.journal_views.push(journal.render());

    for &position in &script.removals {
        let removed = usize::try_from(position)
            .ok()
            .and_then(|index| journal.remove(index));
        match removed {
            Some(entry) => {
                result.add_message(CmdMessage::info(format!(
                    "Removed entry {}: {}",
                    position, entry
                )));
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "No entry at position {}, nothing removed",
                    position
                )));
            }
        }
        result.journal_views.push(journal.render());
    }

    store.save_journal(&journal, &script.destination, script.overwrite)?;
    result.add_message(CmdMessage::info(format!(
        "{} entries kept, {} added in total",
        journal.len(),
        journal.count()
    )));
    result.add_message(CmdMessage::success(SAVE_COMPLETED));

    Ok(result)
}
