//! Settings file handling.
//!
//! Settings live in the platform config folder unless `--settings` points
//! somewhere else:
//! - macOS: ~/Library/Application Support/com.stockroom.Stockroom/
//! - Windows: %APPDATA%/stockroom/Stockroom/config/
//! - Linux: ~/.config/stockroom/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use stockroom_ingest::CsvSchema;
use stockroom_model::{DEFAULT_EXPIRY_WINDOW_DAYS, Session};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "stockroom";
const APP_NAME: &str = "Stockroom";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub session: Session,
    pub inventory: InventorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    /// Days ahead that count as "expiring soon".
    pub expiry_window_days: i64,
    /// Show the built-in sample products when no inventory is available.
    pub use_fallback: bool,
    /// Layout written by `template` when `--schema` is omitted.
    pub default_template: CsvSchema,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            use_fallback: true,
            default_template: CsvSchema::Simple,
        }
    }
}

/// Per-user settings file location, if the platform has one.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// `explicit` when given, otherwise the per-user location.
pub fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(settings_path)
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let Some(path) = resolve_settings_path(explicit) else {
        warn!("could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "unreadable settings file, using defaults");
            Settings::default()
        }
    }
}

/// Write settings as TOML, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Write defaults to the resolved location unless a file already exists.
///
/// Returns the path and whether a file was written.
pub fn write_default_settings(explicit: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = resolve_settings_path(explicit)
        .ok_or_else(|| anyhow!("could not determine settings path"))?;
    if path.exists() {
        return Ok((path, false));
    }
    save_settings(&Settings::default(), &path)?;
    Ok((path, true))
}
