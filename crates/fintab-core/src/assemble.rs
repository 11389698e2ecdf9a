use crate::model::ClassifiedTable;
use serde::{Deserialize, Serialize};

/// All tables extracted under one section label ("Standalone",
/// "Consolidated", or a statement category name), in ascending page order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGroup {
    pub label: String,
    pub tables: Vec<ClassifiedTable>,
}

/// The finished document artifact handed to export consumers (spreadsheet
/// writers and the like). Groups appear in seeding order, tables within a
/// group in page order, records within a table in original line order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentTables {
    pub groups: Vec<TableGroup>,
}

impl DocumentTables {
    pub fn group(&self, label: &str) -> Option<&TableGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn table_count(&self) -> usize {
        self.groups.iter().map(|g| g.tables.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.tables.is_empty())
    }
}

/// Accumulates per-page tables under section labels as the document is
/// processed. Pages classified as unrecognized never reach this type. No
/// deduplication or merging: each page's table is appended independently.
pub struct Assembler {
    groups: Vec<TableGroup>,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler { groups: Vec::new() }
    }

    /// Pre-seed section labels so the output group order is fixed
    /// regardless of which section appears first in the document.
    pub fn with_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Assembler {
            groups: labels
                .iter()
                .map(|l| TableGroup {
                    label: l.as_ref().to_string(),
                    tables: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a table to its section, creating the section on first sight.
    pub fn push(&mut self, label: &str, table: ClassifiedTable) {
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.tables.push(table),
            None => self.groups.push(TableGroup {
                label: label.to_string(),
                tables: vec![table],
            }),
        }
    }

    /// Finalize, dropping sections that collected nothing.
    pub fn finish(self) -> DocumentTables {
        DocumentTables {
            groups: self
                .groups
                .into_iter()
                .filter(|g| !g.tables.is_empty())
                .collect(),
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
