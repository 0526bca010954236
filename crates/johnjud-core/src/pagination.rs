//! In-memory pagination for list operations.

use serde::{Deserialize, Serialize};

/// Information about a page of results.
///
/// All values are the *effective* ones, after normalization of the
/// requested page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub page: usize,
    /// The number of items per page.
    pub page_size: usize,
    /// The number of items before slicing.
    pub total: usize,
    /// The total number of pages.
    pub total_pages: usize,
}

impl PageInfo {
    /// Creates page info, deriving the page count from `total` and `page_size`.
    #[must_use]
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = if page_size > 0 {
            total.div_ceil(page_size)
        } else {
            0
        };

        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

/// Slices `items` down to a single 1-based page.
///
/// A `page` of zero or less becomes 1. A `page_size` of zero or less means
/// one page holding everything. A window starting past the end yields an
/// empty page; a window running past the end is clamped.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: i32, page_size: i32) -> Page<T> {
    let total = items.len();
    let page = usize::try_from(page).ok().filter(|p| *p > 0).unwrap_or(1);
    let page_size = usize::try_from(page_size)
        .ok()
        .filter(|s| *s > 0)
        .unwrap_or(total);

    let info = PageInfo::new(page, page_size, total);
    let start = (page - 1).saturating_mul(page_size);

    if start >= total {
        return Page {
            content: Vec::new(),
            info,
        };
    }

    let end = start.saturating_add(page_size).min(total);
    let content = items.into_iter().skip(start).take(end - start).collect();

    Page { content, info }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<i32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn test_paginate_defaults_return_everything() {
        let page = paginate(five(), 0, 0);
        assert_eq!(page.content, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            page.info,
            PageInfo {
                page: 1,
                page_size: 5,
                total: 5,
                total_pages: 1,
            }
        );
    }

    #[test]
    fn test_paginate_negative_inputs_normalize() {
        let page = paginate(five(), -3, -1);
        assert_eq!(page.len(), 5);
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.page_size, 5);
    }

    #[test]
    fn test_paginate_second_page_is_clamped() {
        let page = paginate(five(), 2, 3);
        assert_eq!(page.content, vec![4, 5]);
        assert_eq!(page.info.page, 2);
        assert_eq!(page.info.page_size, 3);
        assert_eq!(page.info.total, 5);
        assert_eq!(page.info.total_pages, 2);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let page = paginate(five(), 10, 2);
        assert!(page.is_empty());
        assert_eq!(page.info.total, 5);
        assert_eq!(page.info.total_pages, 3);
    }

    #[test]
    fn test_paginate_start_at_total_is_empty() {
        let page = paginate(five(), 2, 5);
        assert!(page.is_empty());
        assert_eq!(page.info.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_input() {
        let page = paginate(Vec::<i32>::new(), 0, 0);
        assert!(page.is_empty());
        assert_eq!(page.info.page_size, 0);
        assert_eq!(page.info.total, 0);
        assert_eq!(page.info.total_pages, 0);
    }

    #[test]
    fn test_paginate_exact_fit() {
        let page = paginate(vec![1, 2, 3, 4], 2, 2);
        assert_eq!(page.content, vec![3, 4]);
        assert_eq!(page.info.total_pages, 2);
    }

    #[test]
    fn test_paginate_huge_page_does_not_overflow() {
        let page = paginate(five(), i32::MAX, i32::MAX);
        assert!(page.is_empty());
        assert_eq!(page.info.total_pages, 1);
    }

    #[test]
    fn test_page_map_keeps_info() {
        let page = paginate(five(), 1, 2).map(|x| x * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.info.total_pages, 3);
    }
}
