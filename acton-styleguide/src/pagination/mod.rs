//! Pagination over in-memory lists
//!
//! [`ArrayPaginator`] cuts a slice into pages; [`SimplePagination`] derives
//! the numbers a page navigation needs from it.
//!
//! ```rust
//! use acton_styleguide::pagination::{ArrayPaginator, SimplePagination};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let paginator = ArrayPaginator::new(&items, 3, 10);
//! assert_eq!(paginator.paginated_items(), &[21, 22, 23, 24, 25]);
//!
//! let pagination = SimplePagination::new(&paginator);
//! assert_eq!(pagination.previous_page_number, Some(2));
//! assert_eq!(pagination.next_page_number, None);
//! ```

/// One page of a slice
///
/// The requested page number is clamped into `1..=number_of_pages`; there is
/// always at least one (possibly empty) page.
#[derive(Debug, Clone, Copy)]
pub struct ArrayPaginator<'a, T> {
    items: &'a [T],
    current_page_number: usize,
    items_per_page: usize,
    number_of_pages: usize,
}

impl<'a, T> ArrayPaginator<'a, T> {
    /// Paginate `items`, showing page `current_page_number`
    ///
    /// `items_per_page` below 1 is treated as 1.
    #[must_use]
    pub fn new(items: &'a [T], current_page_number: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        let number_of_pages = items.len().div_ceil(items_per_page).max(1);
        let current_page_number = current_page_number.clamp(1, number_of_pages);

        Self {
            items,
            current_page_number,
            items_per_page,
            number_of_pages,
        }
    }

    /// Items on the current page
    #[must_use]
    pub fn paginated_items(&self) -> &'a [T] {
        let offset = self.offset();
        let end = (offset + self.items_per_page).min(self.items.len());
        &self.items[offset..end]
    }

    /// Current page number, 1-based
    #[must_use]
    pub const fn current_page_number(&self) -> usize {
        self.current_page_number
    }

    /// Number of pages, at least 1
    #[must_use]
    pub const fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Total number of items across all pages
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.items.len()
    }

    /// 1-based position of the first item on this page, 0 when empty
    #[must_use]
    pub fn first_item_number(&self) -> usize {
        if self.paginated_items().is_empty() {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based position of the last item on this page, 0 when empty
    #[must_use]
    pub fn last_item_number(&self) -> usize {
        self.offset() + self.paginated_items().len()
    }

    const fn offset(&self) -> usize {
        (self.current_page_number - 1) * self.items_per_page
    }
}

/// Page navigation numbers derived from a paginator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePagination {
    /// Current page
    pub current_page_number: usize,
    /// Always 1
    pub first_page_number: usize,
    /// Last page
    pub last_page_number: usize,
    /// Previous page, `None` on the first page
    pub previous_page_number: Option<usize>,
    /// Next page, `None` on the last page
    pub next_page_number: Option<usize>,
    /// Every page number in order
    pub all_page_numbers: Vec<usize>,
}

impl SimplePagination {
    /// Navigation for the paginator's current page
    #[must_use]
    pub fn new<T>(paginator: &ArrayPaginator<'_, T>) -> Self {
        let current = paginator.current_page_number();
        let last = paginator.number_of_pages();

        Self {
            current_page_number: current,
            first_page_number: 1,
            last_page_number: last,
            previous_page_number: (current > 1).then(|| current - 1),
            next_page_number: (current < last).then(|| current + 1),
            all_page_numbers: (1..=last).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_page() {
        let items: Vec<usize> = (0..33).collect();
        let paginator = ArrayPaginator::new(&items, 1, 10);

        assert_eq!(paginator.number_of_pages(), 4);
        assert_eq!(paginator.paginated_items().len(), 10);
        assert_eq!(paginator.first_item_number(), 1);
        assert_eq!(paginator.last_item_number(), 10);
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<usize> = (0..33).collect();
        let paginator = ArrayPaginator::new(&items, 4, 10);

        assert_eq!(paginator.paginated_items(), &[30, 31, 32]);
        assert_eq!(paginator.first_item_number(), 31);
        assert_eq!(paginator.last_item_number(), 33);
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let items: Vec<usize> = (0..33).collect();

        assert_eq!(ArrayPaginator::new(&items, 0, 10).current_page_number(), 1);
        assert_eq!(ArrayPaginator::new(&items, 99, 10).current_page_number(), 4);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        let paginator = ArrayPaginator::new(&items, 5, 10);

        assert_eq!(paginator.number_of_pages(), 1);
        assert_eq!(paginator.current_page_number(), 1);
        assert!(paginator.paginated_items().is_empty());
        assert_eq!(paginator.first_item_number(), 0);
        assert_eq!(paginator.last_item_number(), 0);
    }

    #[test]
    fn test_zero_items_per_page() {
        let items = [1, 2, 3];
        let paginator = ArrayPaginator::new(&items, 2, 0);
        assert_eq!(paginator.number_of_pages(), 3);
        assert_eq!(paginator.paginated_items(), &[2]);
    }

    #[test]
    fn test_simple_pagination_edges() {
        let items: Vec<usize> = (0..33).collect();

        let first = SimplePagination::new(&ArrayPaginator::new(&items, 1, 10));
        assert_eq!(first.previous_page_number, None);
        assert_eq!(first.next_page_number, Some(2));
        assert_eq!(first.all_page_numbers, vec![1, 2, 3, 4]);

        let last = SimplePagination::new(&ArrayPaginator::new(&items, 4, 10));
        assert_eq!(last.previous_page_number, Some(3));
        assert_eq!(last.next_page_number, None);
        assert_eq!(last.last_page_number, 4);
    }

    proptest! {
        #[test]
        fn prop_pages_cover_all_items(len in 0usize..200, per_page in 1usize..25) {
            let items: Vec<usize> = (0..len).collect();
            let pages = ArrayPaginator::new(&items, 1, per_page).number_of_pages();

            let mut seen = Vec::new();
            for page in 1..=pages {
                let paginator = ArrayPaginator::new(&items, page, per_page);
                prop_assert!(paginator.paginated_items().len() <= per_page);
                seen.extend_from_slice(paginator.paginated_items());
            }
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn prop_current_page_in_range(len in 0usize..200, page in 0usize..50, per_page in 0usize..25) {
            let items: Vec<usize> = (0..len).collect();
            let paginator = ArrayPaginator::new(&items, page, per_page);
            prop_assert!(paginator.current_page_number() >= 1);
            prop_assert!(paginator.current_page_number() <= paginator.number_of_pages());
        }
    }
}
