//! Remote Search State
//!
//! Tracks the in-flight container search behind the parent typeahead.
//! Each query gets a ticket; only the newest ticket may write results.

use crate::domain::SearchResult;
use crate::error::ApiError;

/// Queries shorter than this are never sent
pub const MIN_QUERY_LEN: usize = 2;

/// Handle for one issued query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteSearch {
    min_len: usize,
    seq: u64,
    options: Vec<SearchResult>,
    is_loading: bool,
}

impl Default for RemoteSearch {
    fn default() -> Self {
        Self::new(MIN_QUERY_LEN)
    }
}

impl RemoteSearch {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            seq: 0,
            options: Vec::new(),
            is_loading: false,
        }
    }

    pub fn options(&self) -> &[SearchResult] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_len
    }

    /// Start a new query, superseding any earlier one.
    ///
    /// Returns `None` when the query is too short; results and the loading flag are cleared.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        self.seq += 1;
        if !self.accepts(query) {
            self.options.clear();
            self.is_loading = false;
            return None;
        }
        self.is_loading = true;
        Some(SearchTicket {
            seq: self.seq,
            query: query.to_string(),
        })
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.seq
    }

    /// Apply a response. Returns false if the ticket was superseded and the response dropped.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<SearchResult>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!("[search] dropping stale response for {:?}", ticket.query);
            return false;
        }
        match result {
            Ok(options) => self.options = options,
            Err(e) => {
                log::warn!("[search] query {:?} failed: {}", ticket.query, e);
                self.options.clear();
            }
        }
        self.is_loading = false;
        true
    }

    /// Invalidate whatever is in flight
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.is_loading = false;
    }
}
