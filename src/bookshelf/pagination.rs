//! Page arithmetic for the book listing.
//!
//! Pages are 1-indexed. A request outside `[1, last_page]` is clamped to the
//! nearest bound and a [`PageDiagnostic`] says which bound was hit.

use std::fmt;

/// Why a requested page was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDiagnostic {
    BelowMinimum,
    AboveMaximum { last_page: usize },
}

impl fmt::Display for PageDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageDiagnostic::BelowMinimum => write!(f, "Cannot go to a page below 1."),
            PageDiagnostic::AboveMaximum { last_page } => {
                write!(f, "Cannot go to a page above {}.", last_page)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub current_page: usize,
    pub page_size: usize,
    pub last_page: usize,
}

impl Page {
    pub fn start(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }
}

/// Number of the last page; an empty catalog still has one (empty) page.
pub fn last_page(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(page_size).max(1)
}

/// Clamp `requested` into `[1, last_page]`.
///
/// `page_size` must be at least 1; the configuration layer rejects zero.
pub fn clamp(
    requested: i64,
    total_records: usize,
    page_size: usize,
) -> (Page, Option<PageDiagnostic>) {
    let last = last_page(total_records, page_size);
    let page = |current_page| Page {
        current_page,
        page_size,
        last_page: last,
    };

    if requested < 1 {
        return (page(1), Some(PageDiagnostic::BelowMinimum));
    }
    match usize::try_from(requested) {
        Ok(n) if n <= last => (page(n), None),
        _ => (
            page(last),
            Some(PageDiagnostic::AboveMaximum { last_page: last }),
        ),
    }
}

/// Records on `page`, clipped to what exists.
pub fn slice<'a, T>(records: &'a [T], page: &Page) -> &'a [T] {
    let start = page.start().min(records.len());
    let end = (start + page.page_size).min(records.len());
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up_and_is_at_least_one() {
        assert_eq!(last_page(0, 5), 1);
        assert_eq!(last_page(5, 5), 1);
        assert_eq!(last_page(6, 5), 2);
        assert_eq!(last_page(11, 5), 3);
        assert_eq!(last_page(3, 1), 3);
    }

    #[test]
    fn clamp_never_leaves_valid_range() {
        for total in 0..30 {
            for size in 1..7 {
                let last = last_page(total, size);
                for requested in -3..(last as i64 + 4) {
                    let (page, _) = clamp(requested, total, size);
                    assert!(page.current_page >= 1 && page.current_page <= last);
                    assert_eq!(page.last_page, last);
                }
            }
        }
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let (page, diag) = clamp(0, 12, 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(diag, Some(PageDiagnostic::BelowMinimum));
    }

    #[test]
    fn page_past_end_clamps_to_last() {
        let (page, diag) = clamp(3 + 5, 12, 5);
        assert_eq!(page.current_page, 3);
        assert_eq!(diag, Some(PageDiagnostic::AboveMaximum { last_page: 3 }));
    }

    #[test]
    fn valid_page_passes_through() {
        let (page, diag) = clamp(2, 12, 5);
        assert_eq!(page.current_page, 2);
        assert_eq!(diag, None);
    }

    #[test]
    fn slice_clips_last_page() {
        let records: Vec<u32> = (1..=12).collect();
        let (page, _) = clamp(3, records.len(), 5);
        assert_eq!(slice(&records, &page), &[11, 12]);

        let (page, _) = clamp(1, records.len(), 5);
        assert_eq!(slice(&records, &page), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn slice_of_empty_catalog_is_empty() {
        let records: Vec<u32> = Vec::new();
        let (page, diag) = clamp(1, 0, 5);
        assert_eq!(diag, None);
        assert!(slice(&records, &page).is_empty());
    }

    #[test]
    fn diagnostics_read_like_user_messages() {
        assert_eq!(
            PageDiagnostic::AboveMaximum { last_page: 4 }.to_string(),
            "Cannot go to a page above 4."
        );
        assert_eq!(
            PageDiagnostic::BelowMinimum.to_string(),
            "Cannot go to a page below 1."
        );
    }
}
