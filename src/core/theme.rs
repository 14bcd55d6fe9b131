//! # Theme Persistence
//!
//! Light/dark preference for one session, saved through a small key/value
//! interface so the core never touches the filesystem directly.
//!
//! ```text
//! boot ──► ThemeStore::load(storage) ──► NavigationState::new(theme)
//!                                                │
//! toggle ◄── Effect::PersistTheme(theme) ◄── update(Action::ToggleTheme)
//!   │
//!   └──► ThemeStore::set(theme) ──► storage.set("apple-nav-theme", "dark")
//! ```
//!
//! Storage failures never surface to the user. The first failed write flips
//! the store into memory-only mode for the rest of the session.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fixed storage key for the theme flag.
pub const THEME_STORAGE_KEY: &str = "apple-nav-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

// ============================================================================
// Storage Interface
// ============================================================================

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Parse(e) => write!(f, "storage parse error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Minimal string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Volatile store. Used in tests and as the fallback when the file store
/// cannot be opened.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-object file store. Contents are cached on open; every `set` rewrites
/// the whole file via `.tmp` + rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`. A missing file is an
    /// empty store; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            let json = fs::read_to_string(&path).map_err(StorageError::Io)?;
            serde_json::from_str(&json).map_err(StorageError::Parse)?
        } else {
            BTreeMap::new()
        };
        debug!("Opened storage at {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(&self.entries).map_err(StorageError::Parse)?;
        fs::write(&tmp_path, json).map_err(StorageError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(StorageError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep the cache consistent with what is on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// Returns `~/.storefront-nav/storage.json`.
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront-nav").join("storage.json"))
}

/// Open the file-backed store, or an in-memory one when there is no path or
/// the file is unreadable.
pub fn open_storage(path: Option<&Path>) -> Box<dyn KeyValueStore> {
    let Some(path) = path else {
        info!("No storage path; theme preference stays in memory");
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Storage unavailable at {}: {}", path.display(), e);
            Box::new(MemoryStore::new())
        }
    }
}

// ============================================================================
// ThemeStore
// ============================================================================

/// The session's theme, backed by a key/value store.
pub struct ThemeStore<S: KeyValueStore> {
    storage: S,
    theme: Theme,
    /// Set after the first failed write; no further writes are attempted.
    memory_only: bool,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the persisted theme. Absent or unrecognized values give `Light`.
    pub fn load(storage: S) -> Self {
        let theme = match storage.get(THEME_STORAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        };
        info!("Theme loaded: {}", theme);
        Self {
            storage,
            theme,
            memory_only: false,
        }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Persist `theme` and return it. Write failures degrade to memory-only.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        if self.memory_only {
            return theme;
        }
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            warn!("Theme will not persist this session: {}", e);
            self.memory_only = true;
        }
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }

    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
