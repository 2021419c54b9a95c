//! Paging over an ordered list of track records

use crate::error::{AppError, PageDirection};

use super::content::TrackRecord;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed-size pages over search results, in relevance order
#[derive(Clone, Debug)]
pub struct ResultPager {
    records: Vec<TrackRecord>,
    page_size: usize,
    current_page: usize,
}

impl ResultPager {
    /// A zero page size is bumped to one.
    pub fn new(records: Vec<TrackRecord>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn visible_slice(&self) -> &[TrackRecord] {
        let start = self.current_page * self.page_size;
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.records.len());
        &self.records[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        (self.current_page + 1) * self.page_size < self.records.len()
    }

    pub fn go_to_previous(&mut self) -> Result<(), AppError> {
        if !self.has_previous() {
            return Err(AppError::InvalidTransition(PageDirection::Previous));
        }
        self.current_page -= 1;
        Ok(())
    }

    pub fn go_to_next(&mut self) -> Result<(), AppError> {
        if !self.has_next() {
            return Err(AppError::InvalidTransition(PageDirection::Next));
        }
        self.current_page += 1;
        Ok(())
    }

    pub fn reset(&mut self, records: Vec<TrackRecord>) {
        self.records = records;
        self.current_page = 0;
    }

    /// Record at `index` within the visible page
    pub fn record(&self, index: usize) -> Option<&TrackRecord> {
        self.visible_slice().get(index)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ResultPager {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}
