// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat, FileSourceFile};
use serde::Deserialize;

// local imports
use crate::error::Result;
use crate::types::{Locale, Overflow, Symbol};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub delimiter: Symbol,
    pub capacity: usize,
    pub overflow: Overflow,
    pub locale: Locale,
}

impl Settings {
    /// Loads settings from the file at `path` layered over the embedded defaults.
    ///
    /// A missing file is an error only if `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        log::debug!("loading settings from {} (required: {})", path.display(), required);
        Self::build(Some(File::from(path).required(required)))
    }

    fn build(file: Option<File<FileSourceFile, FileFormat>>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.locale.validated()?.check_delimiter(settings.delimiter)?;

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::build(None).unwrap()
    }
}

impl Default for &'static Settings {
    fn default() -> Self {
        crate::config::default()
    }
}
