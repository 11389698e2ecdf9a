use fintab_core::catalog::{builtin, load_catalog};
use fintab_core::error::FintabError;
use fintab_core::extraction::pdftotext::PdftotextExtractor;
use fintab_core::model::StatementVariant;
use fintab_core::{extract_by_headings, ExtractOptions};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    catalog_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), FintabError> {
    let catalog = match catalog_file {
        Some(path) => load_catalog(&path)?,
        None => builtin::default_catalog()?,
    };

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let doc = extract_by_headings(&pdf_bytes, &extractor, &catalog, &ExtractOptions::default())?;

    // Whole-document reporting: a variant with no tables is worth a note,
    // not an error.
    for variant in [StatementVariant::Standalone, StatementVariant::Consolidated] {
        if doc.group(&variant.to_string()).is_none() {
            eprintln!(
                "No {} financial statements found in the PDF.",
                variant.to_string().to_lowercase()
            );
        }
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&doc)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} table(s), written to {}",
                doc.table_count(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&doc)?,
            _ => print!("{}", output::table::format_tables(&doc)),
        },
    }

    Ok(())
}
