//! End-to-end tests for the extraction pipelines.
//!
//! A MockExtractor returns pre-built PageContent without invoking
//! pdftotext, so these tests run without poppler-utils.

use fintab_core::catalog::builtin::default_catalog;
use fintab_core::classify::PageClassifier;
use fintab_core::error::FintabError;
use fintab_core::extraction::{PageContent, PdfExtractor};
use fintab_core::model::{FinancialLineRecord, PeriodLabelPair, StatementCategory};
use fintab_core::{extract_by_headings, extract_with_classifier, scan_headings, ExtractOptions};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FintabError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn balance_sheet_page(number: usize) -> PageContent {
    page(
        number,
        &[
            "ABC TEXTILES LIMITED",
            "STANDALONE BALANCE SHEET",
            "(All amounts in INR lakhs, unless otherwise stated)",
            "Particulars   Note   As at 31 March 2024   As at 31 March 2023",
            "ASSETS",
            "Non-current assets",
            "Property, plant and equipment   3   12,500   11,980",
            "Trade receivables   9(a)   4,494   3,108",
            "",
            "Contingent liabilities   -   -",
            "Total assets   45,210   41,002",
        ],
    )
}

fn cash_flow_page(number: usize) -> PageContent {
    page(
        number,
        &[
            "ABC TEXTILES LIMITED",
            "CONSOLIDATED CASH FLOW STATEMENT",
            "Particulars   31 March 2024   31 March 2023",
            "Cash flow from operating activities",
            "Depreciation and amortisation   4   1,920   1,654",
            "Finance costs   (1,478)   (943)",
        ],
    )
}

fn report_page(number: usize) -> PageContent {
    page(
        number,
        &[
            "DIRECTORS' REPORT",
            "To the members,",
            "Your directors present the annual report of the company.",
        ],
    )
}

// ---------------------------------------------------------------------------
// Heading-driven pipeline
// ---------------------------------------------------------------------------

#[test]
fn heading_pipeline_reconstructs_balance_sheet() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![balance_sheet_page(2)],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    assert_eq!(doc.groups.len(), 1);
    let group = doc.group("Standalone").unwrap();
    assert_eq!(group.tables.len(), 1);

    let table = &group.tables[0];
    assert_eq!(table.heading, "STANDALONE BALANCE SHEET");
    assert_eq!(table.page_number, 2);
    assert_eq!(table.category, StatementCategory::BalanceSheet);
    assert_eq!(
        table.period_labels,
        PeriodLabelPair::new("31 March 2024", "31 March 2023")
    );

    // Header line is index 3; body starts at "ASSETS". The blank line
    // produces no record.
    assert_eq!(table.records.len(), 6);
    assert_eq!(table.records[0], FinancialLineRecord::label_only("ASSETS"));
    assert_eq!(
        table.records[1],
        FinancialLineRecord::label_only("Non-current assets")
    );
    assert_eq!(table.records[2].note, "3");
    assert_eq!(table.records[2].value1, "12,500");
    assert_eq!(
        table.records[3],
        FinancialLineRecord {
            label: "Trade receivables".into(),
            note: "9(a)".into(),
            value1: "4,494".into(),
            value2: "3,108".into(),
        }
    );
    assert_eq!(table.records[4].value1, "-");
    assert_eq!(table.records[4].value2, "-");
    assert_eq!(table.records[5].label, "Total assets");
    assert_eq!(table.records[5].note, "");
}

#[test]
fn heading_pipeline_suppresses_cash_flow_notes() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![cash_flow_page(5)],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    let table = &doc.group("Consolidated").unwrap().tables[0];
    assert_eq!(table.category, StatementCategory::CashFlowStatement);

    let depreciation = table
        .records
        .iter()
        .find(|r| r.label == "Depreciation and amortisation")
        .unwrap();
    // "4" would have been consumed as a note; cash-flow tables force it empty.
    assert_eq!(depreciation.note, "");
    assert_eq!(depreciation.value1, "1,920");
    assert_eq!(depreciation.value2, "1,654");

    let finance = table
        .records
        .iter()
        .find(|r| r.label == "Finance costs")
        .unwrap();
    assert_eq!(finance.value1, "(1,478)");
    assert_eq!(finance.value2, "(943)");
}

#[test]
fn heading_pipeline_drops_unrecognized_pages() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![report_page(1), balance_sheet_page(2), report_page(3)],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    assert_eq!(doc.table_count(), 1);
    assert_eq!(doc.group("Standalone").unwrap().tables[0].page_number, 2);
}

#[test]
fn heading_pipeline_preserves_page_order() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![
            balance_sheet_page(2),
            cash_flow_page(4),
            balance_sheet_page(7),
        ],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    let labels: Vec<&str> = doc.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Standalone", "Consolidated"]);

    let pages: Vec<usize> = doc
        .group("Standalone")
        .unwrap()
        .tables
        .iter()
        .map(|t| t.page_number)
        .collect();
    assert_eq!(pages, vec![2, 7]);
}

#[test]
fn heading_pipeline_survives_missing_period_labels() {
    let catalog = default_catalog().unwrap();
    // No date-like phrase anywhere: period detection falls back to the
    // placeholder pair and the header locator falls back to index 5.
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "STANDALONE BALANCE SHEET",
                "(unaudited)",
                "Particulars",
                "",
                "",
                "ignored by fallback offset",
                "Share capital   500   500",
            ],
        )],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    let table = &doc.group("Standalone").unwrap().tables[0];
    assert!(table.period_labels.is_placeholder());
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0].label, "Share capital");
    assert_eq!(table.records[0].value1, "500");
}

#[test]
fn heading_pipeline_empty_document_yields_no_groups() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![report_page(1)],
    };

    let doc = extract_by_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();
    assert!(doc.is_empty());
    assert!(doc.groups.is_empty());
}

// ---------------------------------------------------------------------------
// Classifier-driven pipeline
// ---------------------------------------------------------------------------

/// Stub standing in for the external trained model: labels pages by crude
/// keyword lookup, with the alias-style labels real models emit.
struct StubClassifier;

impl PageClassifier for StubClassifier {
    fn classify(&self, page_text: &str) -> String {
        let lower = page_text.to_lowercase();
        if lower.contains("cash flow") {
            "Cash Flow".to_string()
        } else if lower.contains("balance sheet") {
            "Balance Sheets".to_string()
        } else {
            "Others".to_string()
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[test]
fn classifier_pipeline_groups_by_category() {
    let extractor = MockExtractor {
        pages: vec![report_page(1), balance_sheet_page(2), cash_flow_page(3)],
    };

    let doc = extract_with_classifier(
        &[],
        &extractor,
        &StubClassifier,
        &ExtractOptions::default(),
    )
    .unwrap();

    let labels: Vec<&str> = doc.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Balance Sheet", "Cash Flow Statement"]);

    let bs = &doc.group("Balance Sheet").unwrap().tables[0];
    assert_eq!(bs.heading, "Page 2");
    assert_eq!(bs.records[3].note, "9(a)");

    let cf = &doc.group("Cash Flow Statement").unwrap().tables[0];
    assert_eq!(cf.heading, "Page 3");
    assert!(cf.records.iter().all(|r| r.note.is_empty()));
}

#[test]
fn classifier_pipeline_drops_unmapped_labels() {
    let extractor = MockExtractor {
        pages: vec![report_page(1), report_page(2)],
    };

    let doc = extract_with_classifier(
        &[],
        &extractor,
        &StubClassifier,
        &ExtractOptions::default(),
    )
    .unwrap();

    assert!(doc.is_empty());
}

// ---------------------------------------------------------------------------
// Heading scan
// ---------------------------------------------------------------------------

#[test]
fn scan_reports_matching_pages_in_order() {
    let catalog = default_catalog().unwrap();
    let extractor = MockExtractor {
        pages: vec![report_page(1), balance_sheet_page(2), cash_flow_page(6)],
    };

    let matches = scan_headings(&[], &extractor, &catalog, &ExtractOptions::default()).unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].page_number, 2);
    assert_eq!(matches[0].phrase, "STANDALONE BALANCE SHEET");
    assert_eq!(matches[1].page_number, 6);
    assert_eq!(matches[1].category, StatementCategory::CashFlowStatement);
}
