//! # Storage Layer
//!
//! Persisting a [`Journal`] is kept out of the journal itself. Callers depend on
//! the [`JournalStore`] trait, so a backend can be swapped without touching the
//! journal or the commands that drive it.
//!
//! ## Implementations
//!
//! - [`stub::StubStore`]: the default backend. It accepts every save and writes
//!   nothing.
//! - [`memory::InMemoryStore`]: keeps snapshots in memory for tests. Honors the
//!   `overwrite` flag.

use crate::error::Result;
use crate::journal::Journal;

pub mod memory;
pub mod stub;

/// Abstract interface for saving journals.
pub trait JournalStore {
    /// Save `journal` under `destination`. `overwrite` allows replacing a
    /// previous save of the same destination, for backends that track one.
    fn save_journal(&mut self, journal: &Journal, destination: &str, overwrite: bool)
        -> Result<()>;
}
