//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait, the seam between the
//! session core and whatever supplies deal data. Today that is either the
//! fixture compiled into the crate or a JSON file on disk; a future network
//! collaborator would implement the same trait.

use super::models::Catalog;
use super::validate::validate;
use crate::domain::error::{DealsError, Result};
use std::path::PathBuf;

/// Fixture shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog.json");

/// Supplier of an immutable catalog snapshot.
///
/// Implementations must return a catalog that has passed [`validate`].
///
/// # Examples
///
/// ```
/// use food_deals::catalog::{BuiltinCatalog, CatalogSource};
///
/// let catalog = BuiltinCatalog.load()?;
/// assert!(!catalog.deals.is_empty());
/// # Ok::<(), food_deals::DealsError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read, parsed or fails validation.
    fn load(&self) -> Result<Catalog>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}

/// Parses and validates catalog JSON.
///
/// # Errors
///
/// Returns [`DealsError::Catalog`] on malformed JSON or failed validation.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json)
        .map_err(|e| DealsError::Catalog(format!("failed to parse JSON: {e}")))?;
    validate(&catalog)?;

    tracing::debug!(
        deals = catalog.deals.len(),
        history = catalog.history.len(),
        comments = catalog.comments.len(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// The fixture compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("builtin_catalog_load").entered();
        parse_catalog(BUILTIN_CATALOG)
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// A catalog read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    file_path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_catalog(&contents)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
