//! Settings loading from JSON, JSONC and TOML files

mod settings;

pub use settings::Settings;

use json_comments::StripComments;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file names searched for, in order of preference
const SETTINGS_FILE_NAMES: &[&str] = &["config.jsonc", "config.json", "config.toml"];

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Unsupported config file format: {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error("No config file found in {0:?}")]
    NotFound(PathBuf),
}

/// Load a JSON file that may contain `//` and `/* */` comments
pub fn load_jsonc<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_jsonc(&content)
}

/// Parse JSON text that may contain comments
pub fn parse_jsonc<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let stripped = StripComments::new(content.as_bytes());
    let value: T = serde_json::from_reader(stripped)?;
    Ok(value)
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Parse TOML text and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let value: T = toml::from_str(content)?;
    Ok(value)
}

/// Load settings, picking the parser from the file extension
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") | Some("jsonc") => load_jsonc(path),
        Some("toml") => load_toml(path),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Parse settings from JSONC text
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    parse_jsonc(content)
}

/// Locate the settings file inside a mod's `config/` directory
pub fn find_settings_file(dir: &Path) -> Result<PathBuf, ConfigError> {
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))
}

/// Settings shipped with the crate
///
/// # Panics
///
/// If the embedded `config.jsonc` does not parse, which is a build defect.
pub fn default_settings() -> Settings {
    let content = include_str!("../../config/config.jsonc");
    parse_settings(content).expect("Failed to parse embedded config.jsonc")
}
