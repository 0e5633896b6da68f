//! Persisted theme/locale preferences.
//!
//! Values live in a flat string key-value store under fixed keys
//! ([`THEME_KEY`], [`LOCALE_KEY`]). The desktop client uses a JSON file; tests
//! use the in-memory store.

use crate::constants::{LOCALE_KEY, THEME_KEY};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unexpected is treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// UI language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// The other locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Parse a stored value. Anything unexpected is treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

/// Durable string key-value storage for preferences.
pub trait PreferenceStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the value cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Stored theme, or `None` when absent or unrecognized.
    fn theme(&self) -> Option<Theme> {
        self.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    /// Stored locale, or `None` when absent or unrecognized.
    fn locale(&self) -> Option<Locale> {
        self.get(LOCALE_KEY).as_deref().and_then(Locale::parse)
    }
}

/// In-memory store. Useful for tests and for sessions without a writable home.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store, written through on every `set`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// is logged and also treated as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(values) => values,
                Err(err) => {
                    warn!("ignoring malformed preferences at {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!("failed to read preferences at {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn theme_and_locale_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Locale::En.toggled(), Locale::Ru);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Locale::parse(" ru "), Some(Locale::Ru));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn memory_store_reads_typed_values() {
        let store = MemoryPreferenceStore::with_entries([(THEME_KEY, "dark"), (LOCALE_KEY, "xx")]);
        assert_eq!(store.theme(), Some(Theme::Dark));
        assert_eq!(store.locale(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(&path);
        assert_eq!(store.theme(), None);
        store.set(THEME_KEY, "dark").expect("persist theme");
        store.set(LOCALE_KEY, "ru").expect("persist locale");

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.theme(), Some(Theme::Dark));
        assert_eq!(reopened.locale(), Some(Locale::Ru));
    }

    #[test]
    fn file_store_treats_malformed_file_as_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").expect("write");

        let mut store = FilePreferenceStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "light").expect("overwrite");
        assert_eq!(FilePreferenceStore::open(&path).theme(), Some(Theme::Light));
    }

    #[test]
    fn file_store_reports_unwritable_location() {
        let dir = TempDir::new().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not dir").expect("write");

        let mut store = FilePreferenceStore::open(blocker.join("preferences.json"));
        assert!(store.set(THEME_KEY, "dark").is_err());
        // The in-memory value still reflects the latest write.
        assert_eq!(store.theme(), Some(Theme::Dark));
    }
}
