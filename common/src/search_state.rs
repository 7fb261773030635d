//! State of the offer search screen and its transitions.
//!
//! The screen owns one [`OffersSearchState`]. Filter submissions, venue changes,
//! search box input and pagination mutate it; every query sent to the index goes
//! through [`OffersSearchState::begin_query`] and comes back through
//! [`OffersSearchState::complete_query`] or [`OffersSearchState::fail_query`].
//! Only the answer to the most recent ticket is applied, so a slow response can
//! not overwrite the results of a later query.

use crate::facet_composition::{FacetError, FilterSelection, compute_filters, venue_filters};
use crate::facet_filter::FacetFilters;
use crate::search_query::SearchQuery;
use crate::search_result::SearchResultOffers;
use crate::venue_filter::VenueFilter;

/// A query handed out by [`OffersSearchState::begin_query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub sequence: u64,
    pub query: SearchQuery,
    pub page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OffersSearchState {
    facet_filters: FacetFilters,
    is_loading: bool,
    query_string: String,
    page: u64,
    results: Option<SearchResultOffers>,
    // query the stored results answered, as it was sent
    results_query: Option<SearchQuery>,
    error: Option<String>,
    revision: u64,
    last_sequence: u64,
}

impl Default for OffersSearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl OffersSearchState {
    pub fn new() -> Self {
        Self {
            facet_filters: FacetFilters::base(),
            is_loading: false,
            query_string: String::new(),
            page: 0,
            results: None,
            results_query: None,
            error: None,
            revision: 0,
            last_sequence: 0,
        }
    }

    pub fn facet_filters(&self) -> &FacetFilters {
        &self.facet_filters
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn results(&self) -> Option<&SearchResultOffers> {
        self.results.as_ref()
    }

    /// Page count of the stored results, or 0 when they answer another query than the current one.
    pub fn known_page_count(&self) -> u64 {
        match (&self.results, &self.results_query) {
            (Some(results), Some(query)) if *query == self.search_query() => results.page_count,
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bumped by every transition that calls for a new query, including a re-submit of identical filters.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery { query_string: self.query_string.clone(), facet_filters: self.facet_filters.clone() }
    }

    /// Replaces the filters with the ones built from `selection` and marks the screen as loading.
    ///
    /// On error nothing changes.
    pub fn submit_filters(&mut self, selection: &FilterSelection, venue_filter: Option<&VenueFilter>) -> Result<(), FacetError> {
        self.facet_filters = compute_filters(selection, venue_filter)?;
        self.is_loading = true;
        self.page = 0;
        self.revision += 1;
        Ok(())
    }

    /// Resets the filters to the base filter plus the venue restriction.
    ///
    /// Department, category and student selections submitted earlier are dropped.
    pub fn venue_filter_changed(&mut self, venue_filter: Option<&VenueFilter>) -> Result<(), FacetError> {
        self.facet_filters = venue_filters(venue_filter)?;
        self.page = 0;
        self.revision += 1;
        Ok(())
    }

    /// Returns false when the text did not change.
    pub fn set_query_string(&mut self, query_string: impl Into<String>) -> bool {
        let query_string = query_string.into();
        if query_string == self.query_string {
            return false;
        }
        self.query_string = query_string;
        self.page = 0;
        self.revision += 1;
        true
    }

    /// Moves to `page` if the results of the current query have it. Page 0 is always reachable.
    pub fn go_to_page(&mut self, page: u64) -> bool {
        if page != 0 && page >= self.known_page_count() {
            return false;
        }
        self.page = page;
        self.revision += 1;
        true
    }

    pub fn begin_query(&mut self) -> QueryTicket {
        self.last_sequence += 1;
        self.is_loading = true;
        QueryTicket { sequence: self.last_sequence, query: self.search_query(), page: self.page }
    }

    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        ticket.sequence == self.last_sequence
    }

    /// Stores `results` if `ticket` is the latest query. Returns whether they were applied.
    pub fn complete_query(&mut self, ticket: &QueryTicket, results: SearchResultOffers) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.results = Some(results);
        self.results_query = Some(ticket.query.clone());
        self.error = None;
        self.is_loading = false;
        true
    }

    /// Records the failure of `ticket` if it is the latest query. Previous results are kept.
    pub fn fail_query(&mut self, ticket: &QueryTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.error = Some(message.into());
        self.is_loading = false;
        true
    }
}
