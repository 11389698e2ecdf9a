use fintab_core::assemble::DocumentTables;
use fintab_core::model::ClassifiedTable;
use std::fmt::Write;

/// Render extracted tables as plain text, one block per table.
pub fn format_tables(doc: &DocumentTables) -> String {
    let mut out = String::new();

    for group in &doc.groups {
        let _ = writeln!(out, "=== {} ===", group.label);
        for table in &group.tables {
            let _ = writeln!(out);
            let _ = writeln!(out, "{} (page {})", table.heading, table.page_number);
            format_table_body(&mut out, table);
        }
        let _ = writeln!(out);
    }

    out
}

fn format_table_body(out: &mut String, table: &ClassifiedTable) {
    let label_width = table
        .records
        .iter()
        .map(|r| r.label.len())
        .chain(std::iter::once("Particulars".len()))
        .max()
        .unwrap_or(11);
    let note_width = table
        .records
        .iter()
        .map(|r| r.note.len())
        .chain(std::iter::once("Notes".len()))
        .max()
        .unwrap_or(5);
    let v1_width = table
        .records
        .iter()
        .map(|r| r.value1.len())
        .chain(std::iter::once(table.period_labels.first.len()))
        .max()
        .unwrap_or(5);

    let _ = writeln!(
        out,
        "  {:<label_width$}  {:<note_width$}  {:>v1_width$}  {}",
        "Particulars", "Notes", table.period_labels.first, table.period_labels.second,
    );
    for record in &table.records {
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:<note_width$}  {:>v1_width$}  {}",
            record.label, record.note, record.value1, record.value2,
        );
    }
}
