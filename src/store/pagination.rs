use serde::Serialize;

/// Pages shown on each side of the current page
pub const WINDOW_RADIUS: u32 = 2;

/// Derived pagination state for one listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    /// Page numbers to render, ascending
    pub window: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    /// Computes the view for `total_count` items split into pages of `page_size`
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_blog::store::PaginationView;
    ///
    /// let view = PaginationView::compute(10, 9, 2);
    /// assert_eq!(view.total_pages, 2);
    /// assert!(view.prev_enabled);
    /// assert!(!view.next_enabled);
    /// ```
    pub fn compute(total_count: usize, page_size: u32, current_page: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = u32::try_from((total_count as u64).div_ceil(page_size)).unwrap_or(u32::MAX);

        let start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
        let end = current_page.saturating_add(WINDOW_RADIUS).min(total_pages);
        let window = if start <= end {
            (start..=end).collect()
        } else {
            Vec::new()
        };

        Self {
            current_page,
            total_pages,
            window,
            prev_enabled: current_page != 1,
            next_enabled: current_page != total_pages,
        }
    }

    /// Whether the control is shown at all
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether navigating to `page` is allowed
    pub fn accepts(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.prev_enabled && self.accepts(self.current_page.saturating_sub(1)))
            .then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.next_enabled && self.accepts(self.current_page.saturating_add(1)))
            .then(|| self.current_page + 1)
    }
}
