// std imports
use std::env;
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::error::Result;
use crate::settings::Settings;

// ---

pub const APP_NAME: &str = "fastread";
pub const CONFIG_ENV: &str = "FASTREAD_CONFIG";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the embedded default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Returns the path of the user configuration file in the platform configuration directory.
pub fn user_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

/// Loads settings.
///
/// An explicitly given `path` takes precedence over the path in the `FASTREAD_CONFIG`
/// environment variable, and both must exist. Otherwise the user configuration file
/// is used if it exists.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        return Settings::load(path, true);
    }

    if let Some(path) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Settings::load(Path::new(&path), true);
    }

    match user_path() {
        Some(path) => Settings::load(&path, false),
        None => Ok(default().clone()),
    }
}
