use crate::cli::Engine;
use crate::page_range::{PageRange, PageSelection};
use crate::pdf::text::{extract_pages, join_pages, ExtractedPages, TextSource};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::path::Path;

pub struct ConvertOptions {
    pub range: Option<PageRange>,
    pub include_page_numbers: bool,
    pub engine: Engine,
}

#[cfg(test)]
impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            range: None,
            include_page_numbers: true,
            engine: Engine::Lopdf,
        }
    }
}

/// Extract the text of `input`, writing it to `output` when one is given.
pub fn run<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<String> {
    let doc = PdfDocument::open(&input)?;
    let info = doc.get_info();
    log::debug!(
        "opened {} ({} pages, title: {:?}, author: {:?}, producer: {:?})",
        doc.path,
        info.page_count,
        info.title,
        info.author,
        info.producer
    );

    let full_text = match options.engine {
        Engine::Lopdf => convert(&doc, options)?,
        Engine::PdfExtract => convert(&ExtractedPages::from_document(&doc)?, options)?,
    };

    if let Some(output) = output {
        std::fs::write(output, &full_text)
            .with_context(|| format!("Failed to write text: {}", output.display()))?;
        println!(
            "\nSaved {} characters to {}",
            group_thousands(full_text.chars().count()),
            output.display()
        );
    }

    Ok(full_text)
}

fn convert<S: TextSource + ?Sized>(source: &S, options: &ConvertOptions) -> Result<String> {
    let selection = PageSelection::resolve(options.range, source.page_count());
    println!("{}", selection.describe());

    if selection.is_empty() {
        log::warn!(
            "page range {:?} selects no pages of {}; output will be empty",
            options.range,
            selection.total
        );
    }

    let pages = extract_pages(source, &selection)?;
    Ok(join_pages(&pages, options.include_page_numbers))
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
