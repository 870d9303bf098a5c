use crate::commands::{CmdMessage, CmdResult};
use crate::config::PrincipiaConfig;
use crate::error::{PrincipiaError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: Option<&Path>, action: ConfigAction) -> Result<CmdResult> {
    let mut config = match config_dir {
        Some(dir) => PrincipiaConfig::load(dir)?,
        None => PrincipiaConfig::default(),
    };
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get_value(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            let dir = config_dir.ok_or_else(|| {
                PrincipiaError::Api("No config directory available to save to".into())
            })?;
            config.set_value(&key, &value)?;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
