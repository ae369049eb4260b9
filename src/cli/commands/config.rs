//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&settings)?;
            println!("{}", content);
        }
        ConfigAction::Set { key, value } => {
            settings.set_value(key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }
        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}
