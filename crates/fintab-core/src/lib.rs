pub mod assemble;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use assemble::{Assembler, DocumentTables};
use catalog::schema::HeadingCatalog;
use classify::heading::match_heading;
use classify::PageClassifier;
use error::FintabError;
use extraction::{PageContent, PdfExtractor};
use model::{ClassifiedTable, StatementCategory, StatementVariant};
use parsing::header::locate_header;
use parsing::periods::detect_period_labels;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Tunable scan windows and fallbacks for the page pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// How many leading lines to inspect for a statement heading.
    pub heading_scan_lines: usize,
    /// How many leading lines to scan for the two period labels.
    pub period_scan_lines: usize,
    /// Header line index assumed when no line carries "PARTICULARS" plus
    /// both period labels. The table body then starts one line below.
    pub fallback_header_index: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            heading_scan_lines: 5,
            period_scan_lines: 15,
            fallback_header_index: 5,
        }
    }
}

/// One page recognized by the heading catalog (no table parsing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingMatch {
    pub page_number: usize,
    pub variant: StatementVariant,
    pub category: StatementCategory,
    pub phrase: String,
}

/// Main heading-driven entry point: reconstruct every statement table whose
/// page carries a catalog heading, grouped by statement variant
/// ("Standalone" / "Consolidated").
///
/// Pages without a heading match are skipped silently; per-page parsing has
/// no failure outcome, so the only errors are extraction-level.
pub fn extract_by_headings(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    catalog: &HeadingCatalog,
    options: &ExtractOptions,
) -> Result<DocumentTables, FintabError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut assembler = Assembler::with_labels(&[
        StatementVariant::Standalone.to_string(),
        StatementVariant::Consolidated.to_string(),
    ]);

    for page in &pages {
        if page.is_blank() {
            continue;
        }

        let Some(entry) = match_heading(&page.lines, catalog, options.heading_scan_lines) else {
            debug!(page = page.page_number, "no heading match, page skipped");
            continue;
        };

        let table = build_table(page, entry.phrase.clone(), entry.category, options);
        info!(
            page = page.page_number,
            variant = %entry.variant,
            category = %entry.category,
            records = table.records.len(),
            "statement table reconstructed"
        );
        assembler.push(&entry.variant.to_string(), table);
    }

    Ok(assembler.finish())
}

/// Classifier-driven entry point: pages are categorized by an injected
/// classifier instead of heading phrases, and tables are grouped by
/// statement category. Pages whose label maps to no category are dropped.
pub fn extract_with_classifier(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    classifier: &dyn PageClassifier,
    options: &ExtractOptions,
) -> Result<DocumentTables, FintabError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut assembler = Assembler::with_labels(&[
        StatementCategory::BalanceSheet.to_string(),
        StatementCategory::IncomeStatement.to_string(),
        StatementCategory::CashFlowStatement.to_string(),
        StatementCategory::Notes.to_string(),
    ]);

    for page in &pages {
        if page.is_blank() {
            continue;
        }

        let raw_label = classifier.classify(&page.text());
        let Some(category) = StatementCategory::from_label_loose(&raw_label) else {
            debug!(
                page = page.page_number,
                label = %raw_label,
                classifier = classifier.name(),
                "unmapped classifier label, page skipped"
            );
            continue;
        };

        let heading = format!("Page {}", page.page_number);
        let table = build_table(page, heading, category, options);
        info!(
            page = page.page_number,
            category = %category,
            records = table.records.len(),
            "statement table reconstructed"
        );
        assembler.push(&category.to_string(), table);
    }

    Ok(assembler.finish())
}

/// Report which pages carry which catalog heading, without parsing tables.
pub fn scan_headings(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    catalog: &HeadingCatalog,
    options: &ExtractOptions,
) -> Result<Vec<HeadingMatch>, FintabError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut matches = Vec::new();
    for page in &pages {
        if page.is_blank() {
            continue;
        }
        if let Some(entry) = match_heading(&page.lines, catalog, options.heading_scan_lines) {
            matches.push(HeadingMatch {
                page_number: page.page_number,
                variant: entry.variant,
                category: entry.category,
                phrase: entry.phrase.clone(),
            });
        }
    }

    Ok(matches)
}

/// Reconstruct one page's table: detect the period labels, locate the
/// header line, parse everything below it.
fn build_table(
    page: &PageContent,
    heading: String,
    category: StatementCategory,
    options: &ExtractOptions,
) -> ClassifiedTable {
    let period_labels = detect_period_labels(&page.lines, options.period_scan_lines);
    let header_idx = locate_header(&page.lines, &period_labels, options.fallback_header_index);
    let body = page.lines.get(header_idx + 1..).unwrap_or(&[]);
    let records = parsing::parse_lines(body, category.is_cash_flow());

    ClassifiedTable {
        heading,
        page_number: page.page_number,
        category,
        period_labels,
        records,
    }
}
