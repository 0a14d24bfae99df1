use serde::Serialize;

/// Default number of entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped to at least 1.
    pub page: usize,
    /// Never less than 1, even for an empty sequence.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices `items` into page `page` (1-based) of `page_size` items.
///
/// Pages past the end are empty. A page size of zero is treated as one.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let start = ((page - 1).saturating_mul(page_size)).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}
