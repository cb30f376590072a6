/// Records shown per page of the detail list.
pub const PAGE_SIZE: usize = 20;

/// Position in a paginated list. Pages are one-based. An empty list has zero
/// pages and sits on page 1 with nothing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    total_pages: usize,
}

impl Pager {
    /// Starts on the first page of a list of `count` items.
    pub fn new(count: usize) -> Self {
        Self {
            page: 1,
            total_pages: count.div_ceil(PAGE_SIZE),
        }
    }

    pub fn page(self) -> usize {
        self.page
    }

    pub fn total_pages(self) -> usize {
        self.total_pages
    }

    pub fn has_next(self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(self) -> bool {
        self.page > 1
    }

    /// Advances one page. No-op on the last page.
    pub fn next(self) -> Self {
        match self.has_next() {
            true => Self {
                page: self.page + 1,
                ..self
            },
            false => self,
        }
    }

    /// Goes back one page. No-op on the first page.
    pub fn prev(self) -> Self {
        match self.has_prev() {
            true => Self {
                page: self.page - 1,
                ..self
            },
            false => self,
        }
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn goto(self, page: usize) -> Self {
        Self {
            page: page.min(self.total_pages).max(1),
            ..self
        }
    }

    /// Returns the items of the current page.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = ((self.page - 1) * PAGE_SIZE).min(items.len());
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

impl std::fmt::Display for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(20, 1)]
    #[case(21, 2)]
    #[case(45, 3)]
    fn test_total_pages(#[case] count: usize, #[case] want: usize) {
        let p = Pager::new(count);
        assert_eq!(p.total_pages(), want);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_navigation() {
        let p = Pager::new(45);
        assert_eq!(p.prev(), p);
        let p = p.next().next();
        assert_eq!(p.page(), 3);
        assert_eq!(p.next(), p);
        assert_eq!(p.prev().page(), 2);
    }

    #[rstest]
    #[case(45, 0, 1)]
    #[case(45, 2, 2)]
    #[case(45, 99, 3)]
    #[case(0, 5, 1)]
    fn test_goto(#[case] count: usize, #[case] page: usize, #[case] want: usize) {
        assert_eq!(Pager::new(count).goto(page).page(), want);
    }

    #[test]
    fn test_slice() {
        let items = (0..45).collect::<Vec<_>>();
        let p = Pager::new(items.len());
        assert_eq!(p.slice(&items), &items[..20]);
        assert_eq!(p.goto(3).slice(&items), &items[40..]);

        let empty = Vec::<u8>::new();
        let p = Pager::new(0);
        assert!(p.slice(&empty).is_empty());
        assert_eq!(p.next(), p);
        assert_eq!(p.prev(), p);
    }
}
