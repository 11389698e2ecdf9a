use crate::catalog::schema::HeadingCatalog;
use crate::error::FintabError;

const STATEMENT_HEADINGS_JSON: &str = include_str!("../../../../catalogs/statement-headings.json");

/// Load the builtin heading catalog.
///
/// The catalog is an open list: every new filing convention discovered in
/// the wild gets its own literal phrase entry. Callers that need different
/// conventions load their own file via `catalog::load_catalog` instead.
pub fn default_catalog() -> Result<HeadingCatalog, FintabError> {
    let catalog: HeadingCatalog = serde_json::from_str(STATEMENT_HEADINGS_JSON)?;
    crate::catalog::validate_catalog(&catalog)?;
    Ok(catalog)
}
