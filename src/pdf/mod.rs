pub mod document;
pub mod text;

#[cfg(test)]
pub mod fixtures;

pub use document::PdfDocument;
