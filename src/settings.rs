use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};

const APP_DIR_NAME: &str = "obstacle-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// User preferences read from `settings.json`. Every field is optional.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Starting difficulty by name; unknown names are ignored at startup.
    pub difficulty: Option<String>,
    /// Obstacle count overriding the built-in default.
    pub obstacles: Option<usize>,
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from the default location.
///
/// Returns defaults when the file does not exist. Returns `Err` when the file
/// exists but cannot be read or parsed, so the caller can warn before
/// entering raw terminal mode.
pub fn load_settings() -> Result<Settings> {
    load_settings_from_path(&settings_path())
}

pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(|source| SnakeError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}
