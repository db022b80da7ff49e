//! Page bounds and slicing.

use std::ops::Range;

/// Number of pages needed for `len` items: `ceil(len / page_size)`.
///
/// A `page_size` of 0 is treated as 1.
fn pages_for_len(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Total page count for `items`; 0 for an empty list.
pub fn page_count<T>(items: &[T], page_size: usize) -> usize {
    pages_for_len(items.len(), page_size)
}

/// Half-open index range of page `page_index`, or `None` past the end.
pub fn page_bounds(len: usize, page_index: usize, page_size: usize) -> Option<Range<usize>> {
    let page_size = page_size.max(1);
    let start = page_index.checked_mul(page_size)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(page_size).min(len);
    Some(start..end)
}

/// Items on page `page_index`. Empty when the page is out of range.
pub fn visible_page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    match page_bounds(items.len(), page_index, page_size) {
        Some(range) => &items[range],
        None => &[],
    }
}

/// Whether pagination controls should be shown at all (`page_count > 1`).
pub fn shows_controls<T>(items: &[T], page_size: usize) -> bool {
    page_count(items, page_size) > 1
}

/// Page math bound to one page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Paginator {
    /// A `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count<T>(&self, items: &[T]) -> usize {
        page_count(items, self.page_size)
    }

    pub fn visible_page<'a, T>(&self, items: &'a [T], page_index: usize) -> &'a [T] {
        visible_page(items, page_index, self.page_size)
    }

    pub fn shows_controls<T>(&self, items: &[T]) -> bool {
        shows_controls(items, self.page_size)
    }

    /// True if `page_index` names a page that exists, or is 0 for an empty list.
    pub fn is_valid_index<T>(&self, items: &[T], page_index: usize) -> bool {
        page_index == 0 || page_index < self.page_count(items)
    }
}
