//! Pagination bar model.

use std::ops::RangeInclusive;

use crate::model::Page;

/// Maximum number of numbered page buttons.
pub const MAX_PAGE_BUTTONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub pages: RangeInclusive<u32>,
    pub current: u32,
    pub total: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Bar for `page`, or `None` when there is only one page.
pub fn pagination_bar<T>(page: &Page<T>) -> Option<PaginationBar> {
    if page.total_pages <= 1 {
        return None;
    }
    Some(PaginationBar {
        pages: page_window(page.current_page, page.total_pages),
        current: page.current_page,
        total: page.total_pages,
        has_previous: page.has_previous(),
        has_next: page.has_next(),
    })
}

/// Up to five page numbers centred on `current`, shifted to stay within
/// `1..=total`.
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    let total = i64::from(total.max(1));
    let current = i64::from(current);
    let half = i64::from(MAX_PAGE_BUTTONS / 2);

    let mut start = current - half;
    let mut end = current + half;

    if start < 1 {
        end = total.min(end + (1 - start));
        start = 1;
    }
    if end > total {
        start = 1.max(start - (end - total));
        end = total;
    }

    (start as u32)..=(end as u32)
}
