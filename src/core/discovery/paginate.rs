//! Fixed-size pagination over result lists
//!
//! Page numbers are 1-based throughout.

/// Courses per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of pages needed to show `len` items (`0` for an empty list)
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items on page `page` (1-based); empty when the page is out of range
#[must_use]
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Every page in order; concatenated they reproduce `items`
pub fn pages<T>(items: &[T], page_size: usize) -> impl Iterator<Item = &[T]> {
    (1..=total_pages(items.len(), page_size)).map(move |n| page(items, n, page_size))
}

/// Pull `page` into `[1, max(1, total_pages)]`
#[must_use]
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(9, 6), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_first_page_length() {
        let items: Vec<u32> = (0..9).collect();
        assert_eq!(page(&items, 1, 6).len(), 6);
        assert_eq!(page(&items[..4], 1, 6).len(), 4);
        assert_eq!(page(&items, 2, 6), &[6, 7, 8]);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(page(&items, 0, 6).is_empty());
        assert!(page(&items, 2, 6).is_empty());
        assert!(page(&items, usize::MAX, 6).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_items() {
        for len in 0..20 {
            let items: Vec<usize> = (0..len).collect();
            let flat: Vec<usize> = pages(&items, 6).flatten().copied().collect();
            assert_eq!(flat, items);
            assert_eq!(pages(&items, 6).count(), total_pages(len, 6));
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 7, 6), 2);
        assert_eq!(clamp_page(0, 7, 6), 1);
        assert_eq!(clamp_page(3, 0, 6), 1);
        assert_eq!(clamp_page(2, 12, 6), 2);
    }
}
