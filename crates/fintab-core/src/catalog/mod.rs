pub mod builtin;
pub mod schema;

use crate::error::FintabError;
use schema::HeadingCatalog;
use std::path::Path;

/// Load a heading catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<HeadingCatalog, FintabError> {
    let content = std::fs::read_to_string(path).map_err(|e| FintabError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a heading catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<HeadingCatalog, FintabError> {
    let catalog: HeadingCatalog =
        serde_json::from_str(json).map_err(|e| FintabError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a heading catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<HeadingCatalog, FintabError> {
    let catalog: HeadingCatalog = serde_json::from_str(json).map_err(FintabError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &HeadingCatalog) -> Result<(), FintabError> {
    if catalog.entries.is_empty() {
        return Err(FintabError::CatalogInvalid(
            "entries must not be empty".into(),
        ));
    }

    for entry in &catalog.entries {
        if entry.phrase.trim().is_empty() {
            return Err(FintabError::CatalogInvalid(
                "heading phrase must not be empty".into(),
            ));
        }
    }

    // Duplicate phrases are harmless at match time (first wins) but they
    // usually mean a copy-paste slip in the catalog file.
    let mut seen: Vec<String> = Vec::new();
    for entry in &catalog.entries {
        let upper = entry.phrase.trim().to_uppercase();
        if seen.contains(&upper) {
            return Err(FintabError::CatalogInvalid(format!(
                "duplicate heading phrase '{}'",
                entry.phrase.trim()
            )));
        }
        seen.push(upper);
    }

    Ok(())
}
