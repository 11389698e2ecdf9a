use crate::catalog::schema::{HeadingCatalog, HeadingEntry};

/// Classify a page by its leading lines against the heading catalog.
///
/// Statement headings sit at the top of the page, so only the first
/// `scan_lines` lines are inspected. Matching is case-insensitive substring
/// containment; within a line, the first catalog entry that matches wins.
/// Pure function, no state.
pub fn match_heading<'a>(
    lines: &[String],
    catalog: &'a HeadingCatalog,
    scan_lines: usize,
) -> Option<&'a HeadingEntry> {
    for line in lines.iter().take(scan_lines) {
        let line_upper = line.trim().to_uppercase();
        if line_upper.is_empty() {
            continue;
        }
        for entry in &catalog.entries {
            if line_upper.contains(&entry.phrase.to_uppercase()) {
                return Some(entry);
            }
        }
    }
    None
}
