use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::path::Path;

/// A parsed PDF, plus the raw bytes it was loaded from.
pub struct PdfDocument {
    pub doc: Document,
    pub bytes: Vec<u8>,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let bytes = std::fs::read(&path).with_context(|| format!("Failed to read PDF: {}", path_str))?;
        Self::from_bytes(bytes, path_str)
    }

    pub fn from_bytes(bytes: Vec<u8>, path: String) -> Result<Self> {
        let doc =
            Document::load_mem(&bytes).with_context(|| format!("Failed to open PDF: {}", path))?;

        if doc.is_encrypted() {
            anyhow::bail!("Encrypted PDFs are not supported: {}", path);
        }

        Ok(PdfDocument { doc, bytes, path })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get metadata from the document info dictionary
    pub fn get_info(&self) -> PdfInfo {
        let mut info = PdfInfo::default();

        if let Ok(Object::Reference(info_ref)) = self.doc.trailer.get(b"Info") {
            if let Ok(Object::Dictionary(dict)) = self.doc.get_object(*info_ref) {
                info.title = get_string_from_dict(dict, b"Title");
                info.author = get_string_from_dict(dict, b"Author");
                info.producer = get_string_from_dict(dict, b"Producer");
            }
        }

        info.page_count = self.page_count();
        info
    }
}

#[derive(Debug, Default)]
pub struct PdfInfo {
    pub page_count: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
}

fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => None,
    })
}

fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE
        let u16_chars: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        String::from_utf16(&u16_chars).ok()
    } else {
        // PDFDocEncoding, approximated as Latin-1
        Some(bytes.iter().map(|&b| b as char).collect())
    }
}

#[cfg(test)]
impl PdfDocument {
    pub fn fixture(pages: &[&str]) -> Self {
        Self::from_bytes(crate::pdf::fixtures::bytes(pages), "fixture.pdf".into()).unwrap()
    }
}
