// Pagination windowing over a filtered result set: fixed page size, 1-based
// clamped page number, prev/next enablement. Page requests outside the valid
// range are clamped, never errored.

/// Listings shown per page.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based, already clamped into [1, max(total_pages, 1)].
    pub current_page: usize,
    /// ceil(len / page_size); 0 for an empty result set.
    pub total_pages: usize,
    pub total_items: usize,
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > 1 && self.current_page < self.total_pages
    }
}

/// Returns the visible slice for `requested_page` along with the page
/// metadata.
pub fn window<T>(items: &[T], page_size: usize, requested_page: usize) -> (&[T], Pagination) {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let current_page = requested_page.clamp(1, total_pages.max(1));

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let slice = if start < total_items { &items[start..end] } else { &items[..0] };

    (
        slice,
        Pagination {
            current_page,
            total_pages,
            total_items,
        },
    )
}
