use crate::commands::{CarlotPaths, CmdMessage, CmdResult};
use crate::config::CarlotConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CarlotPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = CarlotConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CarlotConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    let message = format!("Unknown config key: {}", key);
                    result.add_message(CmdMessage::error(message));
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CarlotConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            let message = format!("{} set to {}", key, display_val);
            result.add_message(CmdMessage::success(message));
            Ok(result)
        }
    }
}
