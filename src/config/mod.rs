pub mod types;

use crate::error::{ConfigError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".nikto-gate.toml";

/// Get the global config file path (~/.nikto-gate.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<types::Config> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}

/// Load configuration from a specific file
pub fn load_config_file(path: &Path) -> Result<types::Config> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }
    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded configuration from {}", path.display());
    parse_config(&content)
}

/// Load configuration from file or use defaults.
/// An explicit file must exist and parse; otherwise the global config is tried.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        return load_config_file(&global);
    }

    Ok(types::Config::default())
}
