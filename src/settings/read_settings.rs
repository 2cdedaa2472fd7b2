use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::corpus::Profile;

/// Errors raised while loading a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a TOML settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub dir: Option<PathBuf>,
    pub profile: Option<Profile>,
    pub parallel: Option<bool>,
    #[serde(default)]
    pub extra_names: Vec<String>,
}

/// Parse settings from TOML text. `origin` is only used for error messages.
pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings, SettingsError> {
    toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse the settings file at `path`.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}
