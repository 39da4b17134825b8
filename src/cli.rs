use crate::page_range::PageRange;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdftotext")]
#[command(about = "Extract plain text from a PDF, optionally restricted to a page range")]
#[command(version)]
pub struct Cli {
    /// PDF file to process
    pub pdf: PathBuf,

    /// Output text file (defaults to the input path with a .txt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start page (1-indexed)
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// End page (inclusive)
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Skip page number markers
    #[arg(long)]
    pub no_page_numbers: bool,

    /// Text extraction engine
    #[arg(long, value_enum, default_value_t = Engine::Lopdf)]
    pub engine: Engine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Page-by-page extraction with lopdf
    Lopdf,
    /// Whole-document extraction with pdf-extract, split per page
    PdfExtract,
}

impl Cli {
    /// The requested page range; only takes effect when both ends are given
    /// and neither is 0.
    pub fn page_range(&self) -> Option<PageRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start != 0 && end != 0 => {
                Some(PageRange { start, end })
            }
            (None, None) => None,
            (start, end) => {
                log::warn!(
                    "ignoring partial page range (start: {:?}, end: {:?}); both -s and -e must be given and non-zero",
                    start,
                    end
                );
                None
            }
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.pdf.with_extension("txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdftotext").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["report.pdf"]);
        assert_eq!(cli.pdf, PathBuf::from("report.pdf"));
        assert_eq!(cli.output_path(), PathBuf::from("report.txt"));
        assert_eq!(cli.page_range(), None);
        assert!(!cli.no_page_numbers);
        assert_eq!(cli.engine, Engine::Lopdf);
    }

    #[test]
    fn test_explicit_output() {
        let cli = parse(&["report.pdf", "-o", "out/notes.md"]);
        assert_eq!(cli.output_path(), PathBuf::from("out/notes.md"));
    }

    #[test]
    fn test_full_range() {
        let cli = parse(&["a.pdf", "-s", "2", "--end", "3", "--no-page-numbers"]);
        assert_eq!(cli.page_range(), Some(PageRange { start: 2, end: 3 }));
        assert!(cli.no_page_numbers);
    }

    #[test]
    fn test_partial_range_is_ignored() {
        assert_eq!(parse(&["a.pdf", "-s", "2"]).page_range(), None);
        assert_eq!(parse(&["a.pdf", "-e", "4"]).page_range(), None);
    }

    #[test]
    fn test_zero_bound_is_ignored() {
        assert_eq!(parse(&["a.pdf", "-s", "0", "-e", "2"]).page_range(), None);
        assert_eq!(parse(&["a.pdf", "-s", "1", "-e", "0"]).page_range(), None);
    }

    #[test]
    fn test_negative_bounds_accepted() {
        let cli = parse(&["a.pdf", "-s", "-1", "-e", "2"]);
        assert_eq!(cli.page_range(), Some(PageRange { start: -1, end: 2 }));
        let cli = parse(&["a.pdf", "--start", "2", "--end", "-4"]);
        assert_eq!(cli.page_range(), Some(PageRange { start: 2, end: -4 }));
    }

    #[test]
    fn test_engine_flag() {
        let cli = parse(&["a.pdf", "--engine", "pdf-extract"]);
        assert_eq!(cli.engine, Engine::PdfExtract);
    }

    #[test]
    fn test_missing_path_rejected() {
        assert!(Cli::try_parse_from(["pdftotext"]).is_err());
    }
}
