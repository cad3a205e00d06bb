use crate::content::{ArticleQuery, SortMode};

/// Transient listing parameters
///
/// Filter, sort and search changes always return to the first page; only
/// [`QueryState::go_to_page`] moves between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: u32,
    page_size: u32,
    filter_tag: Option<String>,
    sort_mode: SortMode,
    search_term: String,
}

impl QueryState {
    /// Creates a query on page 1 with the given fixed page size
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            filter_tag: None,
            sort_mode: SortMode::default(),
            search_term: String::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filter_tag(&self) -> Option<&str> {
        self.filter_tag.as_deref()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Sets the tag filter; an empty tag clears it
    pub fn set_filter_tag(&mut self, tag: Option<String>) {
        self.filter_tag = tag.filter(|t| !t.trim().is_empty());
        self.page = 1;
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
        self.page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Moves to `page` if it lies within `[1, total_pages]`
    ///
    /// Returns false, leaving the state untouched, otherwise.
    pub fn go_to_page(&mut self, page: u32, total_pages: u32) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    /// The API request for this listing
    ///
    /// Pagination is not forwarded: the whole matching set is fetched and
    /// sliced locally so sorting covers every page.
    pub fn to_article_query(&self) -> ArticleQuery {
        let search = self.search_term.trim();
        ArticleQuery {
            search: (!search.is_empty()).then(|| search.to_string()),
            tag: self.filter_tag.clone(),
            sort: self.sort_mode,
            ..ArticleQuery::default()
        }
    }
}
