/// Application configuration
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backing store for the task list
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("tasks.txt"),
        }
    }
}

/// Config file location
/// Windows: %APPDATA%\taskline\config.toml
/// macOS: ~/Library/Application Support/taskline/config.toml
/// Linux: ~/.config/taskline/config.toml
pub fn get_config_path() -> PathBuf {
    let config_dir = directories::BaseDirs::new()
        .expect("Failed to get user directories")
        .config_dir()
        .to_path_buf();
    config_dir.join("taskline").join("config.toml")
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_path();

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(config_path, content)?;

    Ok(())
}

/// Point the tracker at a different backing store file.
pub fn set_data_file(path: String) -> Result<()> {
    let mut config = load_config()?;
    config.data_file = PathBuf::from(path);
    save_config(&config)?;
    println!("Data file set to: {}", config.data_file.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let config = load_config()?;
    println!("Current configuration:");
    println!("  Data file: {}", config.data_file.display());
    println!();
    println!("Config file: {}", get_config_path().display());
    Ok(())
}
