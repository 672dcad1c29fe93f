//! Catalog layer: the immutable fixture a session is built from.
//!
//! # Modules
//!
//! - `models`: Catalog, profile, account menu and session seed records
//! - `source`: [`CatalogSource`] trait with built-in and JSON file sources
//! - `validate`: Ingestion checks

pub mod models;
pub mod source;
pub mod validate;

pub use models::{Catalog, MenuRow, MenuSection, Profile, SessionSeed};
pub use source::{parse_catalog, BuiltinCatalog, CatalogSource, JsonFileCatalog};
pub use validate::validate;
