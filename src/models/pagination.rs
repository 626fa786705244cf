use serde::Serialize;

/// Records per listing page.
pub const PAGE_SIZE: u64 = 10;

/// Number of page links shown in the pager.
const WINDOW: u64 = 10;

/// Pages shown before the current page once the window starts sliding.
const LEAD: u64 = 5;

/// Pager state for a listing: which page links to render and where
/// the previous/next buttons point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_pages: u64,
    pub begin: u64,
    pub end: u64,
    pub previous: u64,
    pub next: u64,
}

impl Pagination {
    /// Build the pager for `current_page` (1-based) out of `total_count` records.
    ///
    /// With no records the window is empty (`begin = 1, end = 0`) and both
    /// buttons point at page 1. A `current_page` past the last page is not
    /// rejected here.
    pub fn compute(total_count: u64, current_page: u64, page_size: u64) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total_count.div_ceil(page_size.max(1));

        if total_pages == 0 {
            return Self {
                total_pages,
                begin: 1,
                end: 0,
                previous: 1,
                next: 1,
            };
        }

        let previous = if current_page != 1 { current_page - 1 } else { 1 };
        let next = if current_page != total_pages {
            current_page.saturating_add(1)
        } else {
            total_pages
        };

        let (mut begin, mut end) = (1, WINDOW);
        if current_page > LEAD + 1 {
            begin = current_page - LEAD;
            end = current_page.saturating_add(WINDOW - LEAD - 1);
        }
        if end > total_pages {
            end = total_pages;
            begin = total_pages.saturating_sub(WINDOW - 1).max(1);
        }

        Self {
            total_pages,
            begin,
            end,
            previous,
            next,
        }
    }
}
