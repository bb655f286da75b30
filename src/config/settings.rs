use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config_dirs::settings_path;
use super::keybinds::KeyBindings;
use crate::errors::ListError;
use crate::ui::Theme;

/// User settings persisted as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in theme name (`dark` or `light`).
    pub theme: String,
    /// Optional theme file overriding `theme`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,
    pub mouse_enabled: bool,
    /// Default tracing filter level; `RUST_LOG` wins when set.
    pub log_level: String,
    /// Action name -> key specs, e.g. `down = ["Down", "j"]`.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            theme_file: None,
            mouse_enabled: true,
            log_level: "info".to_string(),
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Key bindings with this file's overrides applied.
    pub fn keybindings(&self) -> Result<KeyBindings, ListError> {
        KeyBindings::from_overrides(&self.keybinds)
    }

    /// Resolve the theme: `theme_file` if set, else the named built-in.
    pub fn resolve_theme(&self) -> Result<Theme, ListError> {
        if let Some(path) = &self.theme_file {
            let text = fs::read_to_string(path)?;
            return Theme::from_toml(&text);
        }
        Theme::named(&self.theme)
            .ok_or_else(|| ListError::Config(format!("unknown theme `{}`", self.theme)))
    }
}

/// Load settings from the default location, or defaults when none exist.
pub fn load_settings() -> Result<Settings, ListError> {
    match settings_path() {
        Some(p) => load_settings_from(&p),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, ListError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&text)?;
    info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Save settings to the default location.
pub fn save_settings(settings: &Settings) -> Result<(), ListError> {
    let path = settings_path()
        .ok_or_else(|| ListError::Config("no configuration directory available".to_string()))?;
    save_settings_to(settings, &path)
}

/// Write settings to `path` via a temp file and rename so readers never see
/// a partial file.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), ListError> {
    let text = toml::to_string_pretty(settings)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let tmp = path.with_extension(format!("toml.tmp.{}", std::process::id()));
    if let Err(e) = fs::write(&tmp, text) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
