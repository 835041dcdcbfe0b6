use std::ops::Range;

/// Zero-based page plus page size, as handed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 5,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Number of pages for `total` rows; at least one so an empty grid still
    /// has a (blank) first page.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Same model with `page` pulled back into range for `total` rows.
    pub fn clamped(self, total: usize) -> Self {
        Self {
            page: self.page.min(self.page_count(total) - 1),
            ..self
        }
    }

    /// Row indices shown on the current page.
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.page_size == 0 {
            return 0..total;
        }
        let page = self.clamped(total).page;
        let start = (page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// One-based `(from, to)` for the footer summary; `(0, 0)` when empty.
    pub fn displayed_bounds(&self, total: usize) -> (usize, usize) {
        let window = self.window(total);
        if window.is_empty() {
            (0, 0)
        } else {
            (window.start + 1, window.end)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self, total: usize) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
        .clamped(total)
    }

    /// Switching page size goes back to the first page.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self { page: 0, page_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_follow_page_and_size() {
        let p = Pagination::new(1, 5);
        assert_eq!(p.window(12), 5..10);
        assert_eq!(p.displayed_bounds(12), (6, 10));
        assert_eq!(Pagination::new(2, 5).window(12), 10..12);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let p = Pagination::new(9, 5);
        assert_eq!(p.clamped(12).page, 2);
        assert_eq!(p.window(12), 10..12);
    }

    #[test]
    fn empty_grid_has_one_blank_page() {
        let p = Pagination::default();
        assert_eq!(p.page_count(0), 1);
        assert!(p.window(0).is_empty());
        assert_eq!(p.displayed_bounds(0), (0, 0));
        assert!(!p.has_next(0));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let p = Pagination::new(0, 5);
        assert!(!p.has_previous());
        assert_eq!(p.previous().page, 0);

        let last = p.next(7);
        assert_eq!(last.page, 1);
        assert!(!last.has_next(7));
        assert_eq!(last.next(7).page, 1);
    }

    #[test]
    fn changing_page_size_resets_page() {
        let p = Pagination::new(3, 5).with_page_size(10);
        assert_eq!(p, Pagination::new(0, 10));
    }
}
