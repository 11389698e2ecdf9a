use crate::model::PeriodLabelPair;

/// Find the index of the table's header line: the line carrying
/// "PARTICULARS" (case-insensitive) together with both period labels
/// verbatim. The table body starts at the returned index + 1.
///
/// When no line qualifies (period detection fell back to placeholders, or
/// extraction noise mangled the header), the configured fallback index is
/// returned instead: a slightly misaligned table beats a dropped page.
pub fn locate_header(lines: &[String], periods: &PeriodLabelPair, fallback: usize) -> usize {
    lines
        .iter()
        .position(|line| {
            line.to_uppercase().contains("PARTICULARS")
                && line.contains(&periods.first)
                && line.contains(&periods.second)
        })
        .unwrap_or(fallback)
}
