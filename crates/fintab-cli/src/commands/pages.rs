use fintab_core::catalog::{builtin, load_catalog};
use fintab_core::error::FintabError;
use fintab_core::extraction::pdftotext::PdftotextExtractor;
use fintab_core::model::StatementVariant;
use fintab_core::{scan_headings, ExtractOptions};
use std::path::PathBuf;

pub fn run(input_file: PathBuf, catalog_file: Option<PathBuf>) -> Result<(), FintabError> {
    let catalog = match catalog_file {
        Some(path) => load_catalog(&path)?,
        None => builtin::default_catalog()?,
    };

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let matches = scan_headings(&pdf_bytes, &extractor, &catalog, &ExtractOptions::default())?;

    for m in &matches {
        println!(
            "Page {:>3}  {:<12}  {:<19}  {}",
            m.page_number, m.variant, m.category, m.phrase
        );
    }
    if !matches.is_empty() {
        println!();
    }

    for variant in [StatementVariant::Standalone, StatementVariant::Consolidated] {
        let pages: Vec<String> = matches
            .iter()
            .filter(|m| m.variant == variant)
            .map(|m| m.page_number.to_string())
            .collect();
        if pages.is_empty() {
            println!(
                "No {} financial statements found in the PDF.",
                variant.to_string().to_lowercase()
            );
        } else {
            println!("{} statements found on pages: {}", variant, pages.join(", "));
        }
    }

    Ok(())
}
