//! Configuration file loading for the CLI.
//!
//! This module handles finding and loading TOML configuration files from
//! various locations (explicit path, local directory, system directory).
//! The file carries default layout options; command-line flags are OR-ed
//! on top by the caller.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use rookery::{LayoutOptions, RookeryError};

/// Configuration-related errors for the CLI.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for RookeryError {
    fn from(err: ConfigError) -> Self {
        RookeryError::Config(err.to_string())
    }
}

/// Top-level shape of a `config.toml`.
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    /// Default layout options applied before command-line flags.
    #[serde(default)]
    layout: LayoutOptions,
}

/// Find and load layout defaults from a configuration file.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (`rookery/config.toml`)
/// 3. Platform-specific config directory
/// 4. Built-in defaults if none found
///
/// # Errors
///
/// Returns an error if an explicit path is provided but the file does not
/// exist, or if a found file cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<LayoutOptions, RookeryError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("rookery/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("org", "rookeryworks", "rookery") {
        let system_config = proj_dirs.config_dir().join("config.toml");
        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(&system_config);
        }
        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default layout options");
    Ok(LayoutOptions::default())
}

/// Load layout defaults from a TOML file.
fn load_config_file(path: impl AsRef<Path>) -> Result<LayoutOptions, RookeryError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path).map_err(RookeryError::Io)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config.layout)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config(Some("/nonexistent/rookery.toml")).unwrap_err();
        assert!(matches!(err, RookeryError::Config(_)));
    }

    #[test]
    fn layout_section_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[layout]\nborder = true\nrotate = true").unwrap();

        let options = load_config(Some(&path)).unwrap();
        assert!(options.border());
        assert!(options.rotate());
        assert!(!options.coordinates());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout\nborder = yes").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, RookeryError::Config(_)));
    }
}
