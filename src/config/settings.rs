// src/config/settings.rs
//
// Persisted user preferences. One JSON record under the store dir,
// read on settings-page load and at export time, written on Save.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use crate::{csv::Delimiter, error::StoreError, store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Default export delimiter (`tab` unless changed).
    #[serde(default, deserialize_with = "lenient_delimiter")]
    pub default_copy_format: Delimiter,
    #[serde(default)]
    pub theme: Theme,
}

/// Unknown names fall back to comma (logged) instead of failing the whole record.
fn lenient_delimiter<'de, D: Deserializer<'de>>(de: D) -> Result<Delimiter, D::Error> {
    let name = String::deserialize(de)?;
    Ok(Delimiter::parse_or_comma(&name))
}

pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::at(Path::new(STORE_DIR).join(SETTINGS_FILE))
    }
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing record → defaults.
    pub fn load(&self) -> Result<Settings, StoreError> {
        let settings = store::read_json(&self.path)?.unwrap_or_default();
        logd!("Settings: loaded {:?} from {}", settings, self.path.display());
        Ok(settings)
    }

    /// Like `load`, but a broken record degrades to defaults (logged).
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(s) => s,
            Err(e) => {
                loge!("Settings: could not read {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        store::write_json(&self.path, settings)?;
        logf!("Settings: saved {:?}", settings);
        Ok(())
    }
}
