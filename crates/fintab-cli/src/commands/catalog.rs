use fintab_core::catalog::{builtin, load_catalog};
use fintab_core::error::FintabError;
use fintab_core::model::StatementVariant;
use std::path::Path;

pub fn show() -> Result<(), FintabError> {
    let catalog = builtin::default_catalog()?;

    println!("{} (v{})", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{desc}");
    }
    println!();

    for variant in [StatementVariant::Standalone, StatementVariant::Consolidated] {
        println!("{variant} headings:");
        for entry in catalog.entries_for(variant) {
            println!("  {:<19}  {}", entry.category.to_string(), entry.phrase);
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), FintabError> {
    print!(
        r#"Heading Catalog JSON Schema
===========================

A catalog file lists the literal heading phrases that identify
financial-statement pages. Matching is case-insensitive substring
containment against the first few lines of each page, so each entry
should be the shortest phrase that is still unambiguous.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog covers
  version       (string, required)  Version identifier (e.g., "1.0")
  entries       (array, required)   List of heading entries (see below)

Each entry in the "entries" array:
  phrase        (string, required)  Literal heading phrase. Casing is
                                    cosmetic; matching uppercases both sides.
  variant       (string, required)  "standalone" or "consolidated"
  category      (string, required)  One of "balance_sheet",
                                    "income_statement",
                                    "cash_flow_statement", "notes"

Example:
{{
  "name": "My issuer's headings",
  "version": "1.0",
  "entries": [
    {{
      "phrase": "STANDALONE BALANCE SHEET",
      "variant": "standalone",
      "category": "balance_sheet"
    }},
    {{
      "phrase": "Consolidated Cash Flow Statement",
      "variant": "consolidated",
      "category": "cash_flow_statement"
    }}
  ]
}}

Catalogs are open lists: when a filing uses a phrasing the catalog does
not know, add it as a new entry rather than loosening an existing one.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FintabError> {
    let catalog = load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Entries: {}", catalog.entries.len());
    for variant in [StatementVariant::Standalone, StatementVariant::Consolidated] {
        println!(
            "  {} headings: {}",
            variant,
            catalog.entries_for(variant).count()
        );
    }

    Ok(())
}
