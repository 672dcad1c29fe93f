//! Food Deals: session core for a food-deals browser.
//!
//! The crate holds everything a food-deals front end needs besides drawing
//! pixels:
//! - Literal, case-insensitive deal search with four stable sort orders
//! - Session-scoped favorites and per-deal usage counters
//! - Tabbed navigation with a modal deal detail overlay
//! - Comment drafts, share/directions/website actions and account toggles
//! - Serializable view models for every screen
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Session driver (main.rs)                           │  ← stdin commands
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Deal store, navigation, composer                 │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query (query/)│   │ Catalog       │   │ UI (ui/)      │
//! │ - Filtering   │   │ (catalog/)    │   │ - View models │
//! │ - Sort keys   │   │ - Fixtures    │   │               │
//! │ - Highlights  │   │ - Validation  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, clipboard adapters (infrastructure/)      │
//! │  - Error types (domain/error)                       │
//! │  - Deal, history and comment records (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON tracing to a rotating file                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Either a TOML file:
//!
//! ```toml
//! catalog_file = "~/deals/catalog.json"
//! default_sort = "best-deal"
//! location = "Noe Valley, San Francisco"
//! share_origin = "https://deals.example"
//! trace_level = "debug"
//! ```
//!
//! or the same keys as a string map via [`Config::from_map`].
//!
//! # Example
//!
//! ```rust
//! use food_deals::{handle_event, initialize, Config, Event, SortKey};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! for event in [
//!     Event::SetSearchQuery("sushi".to_string()),
//!     Event::SetSortKey(SortKey::HighestRated),
//! ] {
//!     let (_rerender, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.visible_deals()[0].restaurant_name, "Sushi Master");
//! # Ok::<(), food_deals::DealsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod query;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, SessionDefaults, Tab};
pub use domain::{Deal, DealsError, Result};
pub use query::SortKey;

use catalog::{BuiltinCatalog, CatalogSource, JsonFileCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON to load instead of the built-in fixture.
    ///
    /// A leading `~` is expanded against `$HOME`. Default: `None`
    pub catalog_file: Option<String>,

    /// Sort key a session starts with and returns to on reload.
    ///
    /// Default: [`SortKey::Nearest`]
    pub default_sort: SortKey,

    /// Location shown in the header and used for directions.
    ///
    /// Default: `None`, meaning the catalog profile's location.
    pub location: Option<String>,

    /// Base URL deal share links are built from.
    pub share_origin: String,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Trace output file. Default: `<data dir>/food-deals-trace.json`
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            default_sort: SortKey::default(),
            location: None,
            share_origin: app::DEFAULT_SHARE_ORIGIN.to_string(),
            trace_level: None,
            trace_file: None,
        }
    }
}

/// On-disk shape of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    catalog_file: Option<String>,
    default_sort: Option<String>,
    location: Option<String>,
    share_origin: Option<String>,
    trace_level: Option<String>,
    trace_file: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - Blank values are treated as absent
    /// - `default_sort`: falls back to `nearest` when unrecognized
    /// - `share_origin`: falls back to the built-in origin when absent
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use food_deals::{Config, SortKey};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_sort".to_string(), "highest-rated".to_string());
    /// map.insert("location".to_string(), "SoMa".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_sort, SortKey::HighestRated);
    /// assert_eq!(config.location.as_deref(), Some("SoMa"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let default_sort = get("default_sort")
            .and_then(|raw| match raw.parse::<SortKey>() {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::debug!(value = %raw, error = %e, "ignoring unparseable default_sort");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            catalog_file: get("catalog_file"),
            default_sort,
            location: get("location"),
            share_origin: get("share_origin")
                .unwrap_or_else(|| app::DEFAULT_SHARE_ORIGIN.to_string()),
            trace_level: get("trace_level"),
            trace_file: get("trace_file"),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Unlike [`Config::from_map`], this is strict: unknown keys and unknown
    /// sort keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DealsError::Io`] if the file cannot be read and
    /// [`DealsError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| DealsError::Config(format!("failed to parse {}: {e}", path.display())))?;

        let default_sort = file
            .default_sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            catalog_file: file.catalog_file,
            default_sort,
            location: file.location,
            share_origin: file
                .share_origin
                .unwrap_or_else(|| app::DEFAULT_SHARE_ORIGIN.to_string()),
            trace_level: file.trace_level,
            trace_file: file.trace_file,
        })
    }

    /// Values the session starts from and resets to.
    #[must_use]
    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            default_sort: self.default_sort,
            location: self.location.clone(),
            share_origin: self.share_origin.clone(),
        }
    }

    /// The catalog source this configuration selects.
    #[must_use]
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match self.catalog_file.as_deref() {
            Some(path) => Box::new(JsonFileCatalog::new(infrastructure::expand_tilde(path))),
            None => Box::new(BuiltinCatalog),
        }
    }
}

/// Loads the configured catalog and creates a fresh session over it.
///
/// Tracing is not initialized here; call
/// [`observability::init_tracing`] first if logs are wanted.
///
/// # Errors
///
/// Returns the catalog source's error if the catalog cannot be loaded or
/// fails validation.
///
/// # Example
///
/// ```rust
/// use food_deals::{initialize, Config, Tab};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.navigation().tab(), Tab::Deals);
/// # Ok::<(), food_deals::DealsError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    let source = config.catalog_source();
    let _span = tracing::debug_span!("initialize", source = %source.describe()).entered();

    let catalog = source.load()?;
    tracing::info!(
        deals = catalog.deals.len(),
        source = %source.describe(),
        "catalog loaded"
    );

    Ok(AppState::new(Arc::new(catalog), config.session_defaults()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn from_map_is_lenient() {
        let map: BTreeMap<String, String> = [
            ("default_sort", "cheapest"),
            ("location", "   "),
            ("trace_level", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.default_sort, SortKey::Nearest);
        assert_eq!(config.location, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.share_origin, app::DEFAULT_SHARE_ORIGIN);
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deals.toml");
        fs::write(
            &path,
            "default_sort = \"expiring-soon\"\nshare_origin = \"https://d.test\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.default_sort, SortKey::ExpiringSoon);
        assert_eq!(config.share_origin, "https://d.test");
        assert_eq!(config.catalog_file, None);
    }

    #[test]
    fn from_file_rejects_unknown_sort_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deals.toml");
        fs::write(&path, "default_sort = \"cheapest\"\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(DealsError::Config(_))));
    }

    #[test]
    fn from_file_rejects_unknown_keys_and_missing_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deals.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(DealsError::Config(_))));
        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(DealsError::Io(_))
        ));
    }

    #[test]
    fn initialize_uses_configured_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"deals": [], "session": {"favorites": ["x"]}}"#).unwrap();

        let config = Config {
            catalog_file: Some(path.display().to_string()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert!(state.catalog().deals.is_empty());
        assert!(state.store().is_favorite("x"));
    }

    #[test]
    fn initialize_surfaces_catalog_errors() {
        let config = Config {
            catalog_file: Some("/definitely/not/here.json".to_string()),
            ..Config::default()
        };
        assert!(initialize(&config).is_err());
    }
}
