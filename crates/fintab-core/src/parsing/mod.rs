pub mod header;
pub mod periods;
pub mod tokens;

use crate::model::FinancialLineRecord;
use tokens::{is_note_token, is_value_token};

/// Collapse internal whitespace runs to single spaces and trim the ends.
/// Idempotent: normalizing an already-normalized line is a no-op.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reconstruct one table row from a degraded text line.
///
/// Returns None only for lines that are empty after normalization. Every
/// other line yields exactly one record; there is no parse-failure outcome.
/// Classification of the trailing tokens is by priority, first match wins:
///
/// 1. last two tokens are values -> value1/value2, with the third-from-last
///    token consumed as the note reference if it matches the note grammar
/// 2. last token is a value -> value1 only
/// 3. last token is a note reference -> note only
/// 4. otherwise the whole line is the label (section headers like "ASSETS")
///
/// Rule 1 checks value-ness before note-ness, and looks for the note only at
/// the third-from-end position. A label that happens to contain digit-like
/// words is never mistaken for a note.
///
/// `is_cash_flow` forces the note field empty: cash-flow statements carry no
/// note references, and note-shaped tokens there are usually small amounts.
pub fn parse_record(line: &str, is_cash_flow: bool) -> Option<FinancialLineRecord> {
    let line = normalize_line(line);
    if line.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = line.split(' ').collect();
    let n = tokens.len();

    let mut record = if n >= 2 && is_value_token(tokens[n - 1]) && is_value_token(tokens[n - 2]) {
        let (label_end, note) = if n >= 3 && is_note_token(tokens[n - 3]) {
            (n - 3, tokens[n - 3].to_string())
        } else {
            (n - 2, String::new())
        };
        FinancialLineRecord {
            label: tokens[..label_end].join(" "),
            note,
            value1: tokens[n - 2].to_string(),
            value2: tokens[n - 1].to_string(),
        }
    } else if is_value_token(tokens[n - 1]) {
        FinancialLineRecord {
            label: tokens[..n - 1].join(" "),
            value1: tokens[n - 1].to_string(),
            ..Default::default()
        }
    } else if is_note_token(tokens[n - 1]) {
        FinancialLineRecord {
            label: tokens[..n - 1].join(" "),
            note: tokens[n - 1].to_string(),
            ..Default::default()
        }
    } else {
        FinancialLineRecord::label_only(line.as_str())
    };

    if is_cash_flow {
        record.note.clear();
    }

    record.label = record.label.trim().to_string();
    Some(record)
}

/// Parse a page's table body. Empty lines produce no record; everything
/// else lands in the output in original line order.
pub fn parse_lines(lines: &[String], is_cash_flow: bool) -> Vec<FinancialLineRecord> {
    lines
        .iter()
        .filter_map(|line| parse_record(line, is_cash_flow))
        .collect()
}
