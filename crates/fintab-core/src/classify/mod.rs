pub mod heading;

/// Trait for page-category classifiers.
///
/// The production implementation wraps a pre-trained model (vectorizer +
/// classifier) living outside this crate; tests use stubs. The raw label it
/// returns is mapped through `StatementCategory::from_label_loose`, and
/// pages whose label maps to nothing are dropped.
pub trait PageClassifier: Send + Sync {
    /// Classify one page's raw extracted text into a coarse label,
    /// e.g. "Balance Sheet", "Cash Flow", "Notes", "Others".
    fn classify(&self, page_text: &str) -> String;

    /// Name of this classifier (for diagnostics).
    fn name(&self) -> &str;
}

/// Canonical text preprocessing for classifier input: lowercase, strip
/// everything but letters, digits and spaces, collapse whitespace runs.
/// Model implementations are expected to have been trained on text in
/// this form.
pub fn preprocess_page_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        match c {
            'a'..='z' | '0'..='9' => cleaned.push(c),
            c if c.is_whitespace() => cleaned.push(' '),
            _ => {}
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
