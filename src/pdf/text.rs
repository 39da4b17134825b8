use crate::page_range::PageSelection;
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};

/// Width of the `=` rules around each page header
const HEADER_RULE_WIDTH: usize = 60;

/// How often (in pages) extraction progress is reported
const PROGRESS_INTERVAL: u32 = 10;

/// Something that can hand out the plain text of individual pages.
pub trait TextSource {
    fn page_count(&self) -> u32;

    /// Text of the page at 0-based `index`
    fn page_text(&self, index: u32) -> Result<String>;
}

impl TextSource for PdfDocument {
    fn page_count(&self) -> u32 {
        PdfDocument::page_count(self)
    }

    fn page_text(&self, index: u32) -> Result<String> {
        // lopdf keys pages by 1-based page number
        let page_num = index + 1;
        self.doc.extract_text(&[page_num]).with_context(|| {
            format!(
                "Failed to extract text from page {} of {}",
                page_num, self.path
            )
        })
    }
}

/// Per-page text produced by pdf-extract in a single pass over the document.
pub struct ExtractedPages {
    pages: Vec<String>,
    path: String,
}

impl ExtractedPages {
    pub fn from_document(doc: &PdfDocument) -> Result<Self> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&doc.bytes)
            .with_context(|| format!("Failed to extract text from PDF: {}", doc.path))?;
        Ok(ExtractedPages {
            pages,
            path: doc.path.clone(),
        })
    }
}

impl TextSource for ExtractedPages {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, index: u32) -> Result<String> {
        self.pages.get(index as usize).cloned().ok_or_else(|| {
            anyhow::anyhow!(
                "Page {} is out of range (1-{}) in {}",
                index + 1,
                self.pages.len(),
                self.path
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page: u32,
    pub text: String,
}

impl PageText {
    /// Render this page, optionally preceded by its header block.
    pub fn render(&self, include_page_numbers: bool) -> String {
        if include_page_numbers {
            let rule = "=".repeat(HEADER_RULE_WIDTH);
            format!("\n{rule}\nPage {}\n{rule}\n{}", self.page, self.text)
        } else {
            self.text.clone()
        }
    }
}

/// Extract the text of every selected page, in document order.
///
/// Each result carries the page's original 1-based number in the document,
/// not its position within the selection. Extraction errors are fatal.
pub fn extract_pages<S: TextSource + ?Sized>(
    source: &S,
    selection: &PageSelection,
) -> Result<Vec<PageText>> {
    let selected = selection.len();
    let mut results = Vec::with_capacity(selected as usize);

    for (i, index) in (1..).zip(selection.indices()) {
        if i % PROGRESS_INTERVAL == 0 {
            println!("  Progress: {}/{} pages...", i, selected);
        }

        let text = source.page_text(index)?;
        let page = selection.page_number(i);
        log::debug!("page {}: {} characters", page, text.chars().count());
        results.push(PageText { page, text });
    }

    Ok(results)
}

/// Join rendered pages with blank lines between them.
pub fn join_pages(pages: &[PageText], include_page_numbers: bool) -> String {
    pages
        .iter()
        .map(|page| page.render(include_page_numbers))
        .collect::<Vec<_>>()
        .join("\n\n")
}
