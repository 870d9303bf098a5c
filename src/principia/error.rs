use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrincipiaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Journal already saved to {0} (pass overwrite to replace it)")]
    AlreadySaved(String),

    #[error("Unknown {field}: {value}")]
    UnknownValue { field: &'static str, value: String },

    #[error(
        "Unknown config key: {0} (expected one of: {keys})",
        keys = crate::config::CONFIG_KEYS.join(", ")
    )]
    UnknownConfigKey(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PrincipiaError>;
