//! This module handles persisted user preferences, including loading and
//! saving them to a `prefs.toml` file under the platform config directory.
//!
//! Loading is tolerant: a missing or unparseable file yields the defaults,
//! so a damaged preference file never blocks startup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "prefs.toml";
const APP_NAME: &str = "LumenShell";

/// Preferences remembered across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Locale tag last chosen by the user. Absent until the first
    /// successful language switch.
    #[serde(default)]
    pub language: Option<String>,
}

fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFS_FILE);
        path
    })
}

pub fn load() -> Result<Preferences> {
    if let Some(path) = default_prefs_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Preferences::default())
}

pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = default_prefs_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

/// Scoped access to the single persisted locale preference.
///
/// The locale resolver reads this once at startup and writes it on every
/// successful language switch.
pub trait PreferenceStore {
    /// Returns the stored locale tag, if any.
    fn get(&self) -> Option<String>;

    /// Stores the locale tag.
    fn set(&mut self, tag: &str) -> Result<()>;
}

/// Preference store backed by the `prefs.toml` file.
///
/// Writes go through a read-modify-write of the whole preferences file so
/// unrelated fields survive a language switch.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates a store over the default platform config path.
    #[must_use]
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Creates a store over an explicit file path (used by tests).
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read(&self) -> Preferences {
        match &self.path {
            Some(path) => load_from_path(path).unwrap_or_default(),
            None => load().unwrap_or_default(),
        }
    }

    fn write(&self, prefs: &Preferences) -> Result<()> {
        match &self.path {
            Some(path) => save_to_path(prefs, path),
            None => save(prefs),
        }
    }
}

impl PreferenceStore for ConfigStore {
    fn get(&self) -> Option<String> {
        self.read().language
    }

    fn set(&mut self, tag: &str) -> Result<()> {
        let mut prefs = self.read();
        prefs.language = Some(tag.to_string());
        self.write(&prefs)
    }
}
