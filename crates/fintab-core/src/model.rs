use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement variant: which set of accounts a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementVariant {
    Standalone,
    Consolidated,
}

impl fmt::Display for StatementVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementVariant::Standalone => write!(f, "Standalone"),
            StatementVariant::Consolidated => write!(f, "Consolidated"),
        }
    }
}

/// Coarse statement category. Pages that map to none of these
/// ("Others", directors' reports, auditor pages) are dropped before
/// a category is ever assigned, so there is no `Other` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    BalanceSheet,
    IncomeStatement,
    CashFlowStatement,
    Notes,
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementCategory::BalanceSheet => write!(f, "Balance Sheet"),
            StatementCategory::IncomeStatement => write!(f, "Income Statement"),
            StatementCategory::CashFlowStatement => write!(f, "Cash Flow Statement"),
            StatementCategory::Notes => write!(f, "Notes"),
        }
    }
}

impl StatementCategory {
    /// Map a raw classifier label to a category. Classifier models emit
    /// inconsistent labels across training runs ("Balance Sheets",
    /// "Cash Flow", ...), so matching is loose. Returns None for labels
    /// that belong to no statement category; those pages are dropped.
    pub fn from_label_loose(s: &str) -> Option<StatementCategory> {
        let lower = s.trim().to_lowercase();
        if lower.contains("balance sheet") {
            Some(StatementCategory::BalanceSheet)
        } else if lower.contains("cash flow") {
            Some(StatementCategory::CashFlowStatement)
        } else if lower.contains("income statement") || lower.contains("profit and loss") {
            Some(StatementCategory::IncomeStatement)
        } else if lower == "notes" {
            Some(StatementCategory::Notes)
        } else {
            None
        }
    }

    /// Cash-flow statements conventionally carry no note references;
    /// the line parser suppresses the note field for them.
    pub fn is_cash_flow(self) -> bool {
        matches!(self, StatementCategory::CashFlowStatement)
    }
}

/// The two fiscal-period labels heading a table's value columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabelPair {
    pub first: String,
    pub second: String,
}

impl PeriodLabelPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        PeriodLabelPair {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Deterministic fallback pair used when fewer than two period labels
    /// are detected. The table is still produced; only its column headers
    /// are generic.
    pub fn placeholder() -> Self {
        PeriodLabelPair::new("Year1", "Year2")
    }

    pub fn is_placeholder(&self) -> bool {
        self.first == "Year1" && self.second == "Year2"
    }
}

/// One reconstructed row of a financial table.
///
/// All four fields stay verbatim strings: parentheses (negative amounts),
/// a bare "-" (blank), and thousands separators carry meaning that a later
/// pass decides how to interpret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialLineRecord {
    pub label: String,
    pub note: String,
    pub value1: String,
    pub value2: String,
}

impl FinancialLineRecord {
    /// A row with no note and no values, e.g. a section header like "ASSETS".
    pub fn label_only(label: impl Into<String>) -> Self {
        FinancialLineRecord {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn is_label_only(&self) -> bool {
        self.note.is_empty() && self.value1.is_empty() && self.value2.is_empty()
    }
}

/// One page's reconstructed table, immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedTable {
    /// Matched heading phrase, or "Page N" in the classifier pipeline.
    pub heading: String,
    pub page_number: usize,
    pub category: StatementCategory,
    pub period_labels: PeriodLabelPair,
    pub records: Vec<FinancialLineRecord>,
}
