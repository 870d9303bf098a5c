//! # API Facade
//!
//! The single entry point for every principia operation, whatever the UI.
//!
//! The facade parses user-facing text (colors, sizes, config keys) into domain
//! values, applies configuration defaults, and dispatches to `commands/*.rs`.
//! It never prints: every method returns `Result<CmdResult>`.
//!
//! `PrincipiaApi<S: JournalStore>` is generic over the journal backend:
//! - Production: `PrincipiaApi<StubStore>`
//! - Testing: `PrincipiaApi<InMemoryStore>`

use crate::catalog::demo_catalog;
use crate::commands;
use crate::config::PrincipiaConfig;
use crate::error::Result;
use crate::model::{Color, Size};
use crate::store::JournalStore;
use std::path::PathBuf;

pub struct PrincipiaApi<S: JournalStore> {
    store: S,
    config: PrincipiaConfig,
    config_dir: Option<PathBuf>,
}

impl<S: JournalStore> PrincipiaApi<S> {
    /// Build the facade, loading `config.json` from `config_dir` when given.
    pub fn new(store: S, config_dir: Option<PathBuf>) -> Result<Self> {
        let config = match &config_dir {
            Some(dir) => PrincipiaConfig::load(dir)?,
            None => PrincipiaConfig::default(),
        };
        Ok(Self {
            store,
            config,
            config_dir,
        })
    }

    pub fn with_config(store: S, config: PrincipiaConfig) -> Self {
        Self {
            store,
            config,
            config_dir: None,
        }
    }

    pub fn filter_demo(&self) -> Result<commands::CmdResult> {
        commands::filter::demo(demo_catalog())
    }

    /// Filter the catalog by color and/or size given as text. With neither,
    /// this is the demo.
    pub fn filter_products(
        &self,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<commands::CmdResult> {
        if color.is_none() && size.is_none() {
            return self.filter_demo();
        }
        let color = color.map(str::parse::<Color>).transpose()?;
        let size = size.map(str::parse::<Size>).transpose()?;
        commands::filter::run(demo_catalog(), color, size)
    }

    pub fn journal_demo(&mut self) -> Result<commands::CmdResult> {
        self.journal(Vec::new(), Vec::new(), None, false)
    }

    /// Run a journal session. With no `entries` this is the demo script,
    /// still honoring any `removals`, `destination` or `overwrite` given.
    /// `destination` falls back to the configured one; `overwrite` is on if
    /// either the caller or the config asks for it.
    pub fn journal(
        &mut self,
        entries: Vec<String>,
        removals: Vec<i64>,
        destination: Option<String>,
        overwrite: bool,
    ) -> Result<commands::CmdResult> {
        let destination = destination.unwrap_or_else(|| self.config.save_destination.clone());
        let mut script = if entries.is_empty() {
            JournalScript::demo(destination)
        } else {
            JournalScript::new(entries, destination)
        };
        if !removals.is_empty() {
            script = script.with_removals(removals);
        }
        let script = script.with_overwrite(overwrite || self.config.overwrite);
        commands::journal::run(&mut self.store, &script)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(self.config_dir.as_deref(), action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::config::ConfigAction;
pub use commands::journal::{JournalScript, SAVE_COMPLETED};
pub use commands::{CmdMessage, CmdResult, FilterPass, MessageLevel};
