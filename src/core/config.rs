//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront-nav/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::default_storage_path;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub storage_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    pub content_path: Option<String>,
    pub search_item_id: Option<String>,
    pub store_locator_item_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewportConfig {
    pub pixels_per_column: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_SEARCH_ITEM_ID: &str = "search-link";
pub const DEFAULT_STORE_LOCATOR_ITEM_ID: &str = "store-locator";
pub const DEFAULT_PIXELS_PER_COLUMN: u32 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    /// `None` = use the bundled demo content.
    pub content_path: Option<PathBuf>,
    /// `None` = no home directory; theme stays in memory.
    pub storage_path: Option<PathBuf>,
    pub search_item_id: String,
    pub store_locator_item_id: String,
    pub pixels_per_column: u32,
    /// Pinned viewport width; terminal resizes are ignored when set.
    pub fixed_width: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storefront-nav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront-nav").join("config.toml"))
}

/// Load config from `~/.storefront-nav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as `load_config`, for an explicit path.
pub fn load_config_from(path: &Path) -> Result<NavConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NavConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# storefront-nav Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                    # "error", "warn", "info", "debug", "trace", "off"
# storage_path = "/home/me/.storefront-nav/storage.json"   # Or STOREFRONT_NAV_STORAGE

# [content]
# content_path = "navbar.json"           # Or STOREFRONT_NAV_CONTENT, or --content
# search_item_id = "search-link"         # Item id that opens the search overlay
# store_locator_item_id = "store-locator"  # Item id that toggles the store locator

# [viewport]
# pixels_per_column = 10                 # Terminal column width in logical pixels
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_content` and `cli_width` are from CLI flags (None = not specified).
pub fn resolve(
    config: &NavConfig,
    cli_content: Option<&Path>,
    cli_width: Option<u32>,
) -> ResolvedConfig {
    // Content: CLI → env → config → bundled demo
    let content_path = cli_content
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("STOREFRONT_NAV_CONTENT").ok().map(PathBuf::from))
        .or_else(|| config.content.content_path.as_ref().map(PathBuf::from));

    // Storage: env → config → ~/.storefront-nav/storage.json
    let storage_path = std::env::var("STOREFRONT_NAV_STORAGE")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.general.storage_path.as_ref().map(PathBuf::from))
        .or_else(default_storage_path);

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // A zero scale would pin every width to Mobile
    let pixels_per_column = config
        .viewport
        .pixels_per_column
        .filter(|&px| px > 0)
        .unwrap_or(DEFAULT_PIXELS_PER_COLUMN);

    ResolvedConfig {
        log_level,
        content_path,
        storage_path,
        search_item_id: config
            .content
            .search_item_id
            .clone()
            .unwrap_or_else(|| DEFAULT_SEARCH_ITEM_ID.to_string()),
        store_locator_item_id: config
            .content
            .store_locator_item_id
            .clone()
            .unwrap_or_else(|| DEFAULT_STORE_LOCATOR_ITEM_ID.to_string()),
        pixels_per_column,
        fixed_width: cli_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = NavConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.content.content_path.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NavConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.search_item_id, DEFAULT_SEARCH_ITEM_ID);
        assert_eq!(resolved.store_locator_item_id, DEFAULT_STORE_LOCATOR_ITEM_ID);
        assert_eq!(resolved.pixels_per_column, DEFAULT_PIXELS_PER_COLUMN);
        assert!(resolved.fixed_width.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NavConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                storage_path: None,
            },
            content: ContentConfig {
                content_path: None,
                search_item_id: Some("find".to_string()),
                store_locator_item_id: Some("stores".to_string()),
            },
            viewport: ViewportConfig {
                pixels_per_column: Some(8),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.search_item_id, "find");
        assert_eq!(resolved.store_locator_item_id, "stores");
        assert_eq!(resolved.pixels_per_column, 8);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = NavConfig {
            content: ContentConfig {
                content_path: Some("from-config.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("from-cli.json")), Some(1440));
        assert_eq!(resolved.content_path, Some(PathBuf::from("from-cli.json")));
        assert_eq!(resolved.fixed_width, Some(1440));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = NavConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                storage_path: None,
            },
            viewport: ViewportConfig {
                pixels_per_column: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.pixels_per_column, DEFAULT_PIXELS_PER_COLUMN);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[content]
store_locator_item_id = "find-a-store"
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.content.store_locator_item_id.as_deref(),
            Some("find-a-store")
        );
        assert!(config.content.search_item_id.is_none());
        assert!(config.viewport.pixels_per_column.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cfg").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.log_level.is_none());

        // The generated file is all comments, so it parses back to defaults
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("store_locator_item_id"));
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.content.content_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[viewport]\npixels_per_column = \"wide\"\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
