// src/domain/state.rs

use crate::domain::pagination::paginate;
use crate::domain::property::PropertyRecord;
use crate::domain::search::{filter_properties, tokenize};

/// How pagination behaves while a non-empty query is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPaging {
    /// One page showing every hit; normal paging resumes once the query is
    /// cleared. This is the reference behavior.
    SinglePage,
    /// Keep paginating the filtered results.
    Paged,
}

/// The board's entire mutable state: the loaded records plus the current
/// query and page. The presentation layer owns exactly one of these per
/// interaction and reads everything it renders out of [`BoardView`].
#[derive(Debug)]
pub struct BoardState<'a> {
    properties: &'a [PropertyRecord],
    fallback: bool,
    page_size: usize,
    paging: SearchPaging,
    query: String,
    page: usize,
}

/// Immutable snapshot handed to the templates.
#[derive(Debug)]
pub struct BoardView {
    /// The records visible on the current page, in dataset order.
    pub rows: Vec<PropertyRecord>,
    pub query: String,
    pub terms: Vec<String>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub total_loaded: usize,
    /// 1-based bounds of `rows` within the filtered set; 0 when empty.
    pub start_index: usize,
    pub end_index: usize,
    pub fallback: bool,
}

impl<'a> BoardState<'a> {
    pub fn new(
        properties: &'a [PropertyRecord],
        fallback: bool,
        page_size: usize,
        paging: SearchPaging,
    ) -> Self {
        Self {
            properties,
            fallback,
            page_size,
            paging,
            query: String::new(),
            page: 1,
        }
    }

    /// Apply a new search query. Every search action resets to page 1; the
    /// view re-clamps anyway, so a stale page can never leak through.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    /// Request a page. Stored as-is and clamped against the filtered total
    /// when the view is built.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Run the filter engine and pagination controller over the current
    /// state and produce the render snapshot.
    pub fn view(&self) -> BoardView {
        let filtered = filter_properties(self.properties, &self.query);
        let terms = tokenize(&self.query);

        let searching = !terms.is_empty();
        let (page_size, requested_page) = if searching && self.paging == SearchPaging::SinglePage {
            // All hits on one page while a query is active.
            (filtered.len().max(1), 1)
        } else {
            (self.page_size, self.page)
        };

        let page = paginate(&filtered, page_size, requested_page);

        BoardView {
            rows: page.records.to_vec(),
            query: self.query.clone(),
            terms,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_filtered: page.total_items,
            total_loaded: self.properties.len(),
            start_index: page.start_index,
            end_index: page.end_index,
            fallback: self.fallback,
        }
    }
}
