use crate::config::PrincipiaConfig;
use crate::model::Product;
use serde::Serialize;

pub mod config;
pub mod filter;
pub mod journal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One application of a specification to a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPass {
    pub label: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub filter_passes: Vec<FilterPass>,
    /// Rendered journal text, one element per point the journal was shown.
    pub journal_views: Vec<String>,
    pub config: Option<PrincipiaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_filter_passes(mut self, passes: Vec<FilterPass>) -> Self {
        self.filter_passes = passes;
        self
    }

    pub fn with_config(mut self, config: PrincipiaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
