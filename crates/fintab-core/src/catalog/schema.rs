use crate::model::{StatementCategory, StatementVariant};
use serde::{Deserialize, Serialize};

/// A catalog of literal statement-heading phrases.
///
/// Real filings use dozens of near-duplicate heading phrasings across years
/// and issuers. The catalog is an open, growable list of exact phrase
/// variants rather than one clever regex: new conventions cost one entry,
/// and exact-phrase containment rarely misfires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingCatalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub entries: Vec<HeadingEntry>,
}

/// One recognizable heading phrase and what it identifies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Matched by case-insensitive substring containment.
    pub phrase: String,
    pub variant: StatementVariant,
    pub category: StatementCategory,
}

impl HeadingCatalog {
    pub fn entries_for(&self, variant: StatementVariant) -> impl Iterator<Item = &HeadingEntry> {
        self.entries.iter().filter(move |e| e.variant == variant)
    }
}
