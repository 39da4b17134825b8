use std::ops::Range;

/// A user-requested page range, 1-indexed and inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: i64,
    pub end: i64,
}

/// The concrete pages to process, as a 0-indexed half-open slice `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    pub lo: u32,
    pub hi: u32,
    pub total: u32,
    pub ranged: bool,
}

impl PageSelection {
    /// Resolve an optional range against the document's page count.
    ///
    /// Out-of-range bounds are clamped rather than rejected: a start below 1
    /// (negative included) becomes page 1, an end past the last page becomes
    /// the last page. A range that is empty after clamping selects nothing.
    pub fn resolve(range: Option<PageRange>, total: u32) -> Self {
        match range {
            None => PageSelection {
                lo: 0,
                hi: total,
                total,
                ranged: false,
            },
            Some(PageRange { start, end }) => {
                let lo = u32::try_from(start.max(1) - 1).unwrap_or(u32::MAX);
                // never above total, so the narrowing is lossless
                let hi = end.clamp(0, i64::from(total)) as u32;
                if start < 1 || end > i64::from(total) {
                    log::debug!(
                        "clamped page range {}-{} to {}-{} ({} pages)",
                        start,
                        end,
                        u64::from(lo) + 1,
                        hi,
                        total
                    );
                }
                PageSelection {
                    lo,
                    hi,
                    total,
                    ranged: true,
                }
            }
        }
    }

    pub fn len(&self) -> u32 {
        self.hi.saturating_sub(self.lo)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 0-based page indices, in document order
    pub fn indices(&self) -> Range<u32> {
        if self.is_empty() {
            0..0
        } else {
            self.lo..self.hi
        }
    }

    /// Original 1-based document page number of the `i`-th selected page (1-based).
    pub fn page_number(&self, i: u32) -> u32 {
        self.lo + i
    }

    pub fn describe(&self) -> String {
        if self.ranged {
            format!(
                "Extracting pages {} to {} of {}...",
                u64::from(self.lo) + 1,
                self.hi,
                self.total
            )
        } else {
            format!("Extracting all {} pages...", self.total)
        }
    }
}
