use crate::model::PeriodLabelPair;
use regex::Regex;
use std::sync::LazyLock;

/// Date-like phrase heading a value column. Three shapes:
/// "March 31, 2024", "31 March 2024", "March 2024" — optionally preceded
/// by "as at"/"as of", which is not part of the label.
static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:as\s+(?:at|of)\s*)?([A-Za-z]+\s*\d{1,2},\s*\d{4}|\d{1,2}\s+[A-Za-z]+\s+\d{4}|[A-Za-z]+\s+\d{4})",
    )
    .expect("period label regex is valid")
});

/// Scan the first `scan_lines` lines for two distinct fiscal-period labels.
///
/// Matches are collected in first-seen order and the scan stops as soon as
/// two are found, so the window effectively widens only as far as needed.
/// If fewer than two turn up, a fixed placeholder pair is returned: a table
/// with generic column headers is strictly better than no table. Never fails.
pub fn detect_period_labels(lines: &[String], scan_lines: usize) -> PeriodLabelPair {
    let mut candidates: Vec<String> = Vec::new();

    for line in lines.iter().take(scan_lines) {
        for cap in PERIOD_RE.captures_iter(line) {
            let label = strip_as_at_prefix(cap[1].trim()).to_string();
            if !label.is_empty() && !candidates.contains(&label) {
                candidates.push(label);
            }
        }
        if candidates.len() >= 2 {
            return PeriodLabelPair::new(candidates[0].clone(), candidates[1].clone());
        }
    }

    PeriodLabelPair::placeholder()
}

/// Defensive second strip: the "Month Year" shape can swallow a leading
/// "at"/"of" word when the prefix group did not consume it.
fn strip_as_at_prefix(label: &str) -> &str {
    let lower = label.to_lowercase();
    for prefix in ["as at", "as of"] {
        if lower.starts_with(prefix) {
            return label[prefix.len()..].trim_start();
        }
    }
    label
}
