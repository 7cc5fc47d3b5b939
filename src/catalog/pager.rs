//! Fixed-size pagination over a filtered sequence.

/// One page of a sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size` of them.
    pub items: &'a [T],
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// The 1-based page actually shown after clamping the request.
    pub effective_page: usize,
}

impl<T> Page<'_, T> {
    /// Whether page navigation should be shown at all.
    #[must_use]
    pub const fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// `max(1, ceil(len / page_size))`. A page size of zero counts as one.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    ((len + size - 1) / size).max(1)
}

/// Clamps a requested 1-based page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slices `filtered` into the page nearest to `requested`.
///
/// # Examples
///
/// ```
/// use promptfolio::catalog::paginate;
///
/// let items: Vec<u32> = (0..25).collect();
/// let page = paginate(&items, 12, 5);
/// assert_eq!(page.effective_page, 3);
/// assert_eq!(page.items, &[24]);
/// ```
#[must_use]
pub fn paginate<T>(filtered: &[T], page_size: usize, requested: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let total = total_pages(filtered.len(), size);
    let effective = clamp_page(requested, total);

    let start = ((effective - 1) * size).min(filtered.len());
    let end = (start + size).min(filtered.len());

    Page {
        items: &filtered[start..end],
        total_pages: total,
        effective_page: effective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn out_of_range_request_clamps_to_last_page() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, 12, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.effective_page, 3);
        assert_eq!(page.items, &[24]);
    }

    #[test]
    fn empty_sequence_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 12, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.effective_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_multiple_pages());
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let items: Vec<usize> = (0..30).collect();
        let page = paginate(&items, 12, 0);
        assert_eq!(page.effective_page, 1);
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn zero_page_size_behaves_as_one() {
        let items: Vec<usize> = (0..3).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[1]);
    }

    proptest! {
        #[test]
        fn pages_partition_the_sequence(len in 0usize..100, size in 1usize..20) {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, size);
            prop_assert!(total >= 1);

            let mut rebuilt = Vec::new();
            for p in 1..=total {
                let page = paginate(&items, size, p);
                prop_assert_eq!(page.effective_page, p);
                prop_assert!(page.items.len() <= size);
                rebuilt.extend_from_slice(page.items);
            }
            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn effective_page_always_in_range(len in 0usize..100, size in 0usize..20, req in 0usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let page = paginate(&items, size, req);
            prop_assert!(page.effective_page >= 1);
            prop_assert!(page.effective_page <= page.total_pages);
        }
    }
}
