//! # Journal
//!
//! An ordered list of text entries. The journal only knows how to hold and
//! render its entries; saving it is the job of a [`crate::store::JournalStore`].
//!
//! `count` tracks how many entries were ever added. Removing an entry does not
//! decrement it, so after removals `count()` can exceed `len()`.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, text: impl Into<String>) {
        self.count += 1;
        self.entries.push(text.into());
    }

    /// Removes the entry at `index`, returning it.
    ///
    /// Out-of-range positions are ignored and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index))
    }

    /// All entries joined by newlines. Empty journal renders as "".
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
