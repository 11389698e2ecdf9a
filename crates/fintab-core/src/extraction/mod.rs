pub mod pdftotext;

use crate::error::FintabError;

/// Text extracted from a single page of a PDF.
///
/// Extraction flattens the page's visual layout: a row that showed
/// "Particulars | Note | Year1 | Year2" arrives as one whitespace-separated
/// line. Recovering that structure is the parser's job; this type just
/// carries the degraded lines.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// True if the page carries no usable text (extraction may return
    /// nothing for image-only pages).
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FintabError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
