//! Shared fixtures for tracer integration tests

use anyhow::{Context, Result};
use std::sync::Arc;
use tl_driver::TagChecker;
use tl_meta::{CatalogSource, Registry, RegistryBuilder};

/// Catalog used by every integration test
pub const CATALOG: &str = include_str!("../fixtures/catalog.toml");

/// Build a registry from TOML catalog text
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog or the declarations
/// do not form a valid registry.
pub fn registry_from_toml(text: &str) -> Result<Registry> {
    let source: CatalogSource = toml::from_str(text).context("Failed to parse catalog")?;
    let mut builder = RegistryBuilder::new();
    builder.extend(source);
    builder.build().context("Failed to build registry")
}

/// The registry built from [`CATALOG`]
///
/// # Errors
///
/// Returns an error if the bundled catalog is invalid.
pub fn fixture_registry() -> Result<Arc<Registry>> {
    registry_from_toml(CATALOG).map(Arc::new)
}

/// A checker over the fixture registry with the default configuration
///
/// # Errors
///
/// Returns an error if the bundled catalog is invalid.
pub fn fixture_checker() -> Result<TagChecker> {
    fixture_registry().map(TagChecker::new)
}

/// Display names of the terminal types of `source`, sorted
#[must_use]
pub fn terminal_names(checker: &TagChecker, source: &str) -> Vec<String> {
    let mut names = checker.check(source).terminal_type_names(checker.registry());
    names.sort();
    names
}
