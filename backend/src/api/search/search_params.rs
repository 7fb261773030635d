//! Index query builder for search queries.

use common::{search_const::{ATTRIBUTES_TO_HIGHLIGHT, ATTRIBUTES_TO_RETRIEVE}, search_query::SearchQuery};

use crate::index_utils::search_index_client::IndexQueryParams;


pub fn build_index_query(query: &SearchQuery, page: u64, hits_per_page: u64) -> IndexQueryParams {
    IndexQueryParams {
        query: query.query_string.trim().to_string(),
        // requests coming from outside the search page may have dropped it
        facet_filters: query.facet_filters.clone().with_base(),
        attributes_to_retrieve: ATTRIBUTES_TO_RETRIEVE.iter().map(|s| s.to_string()).collect(),
        attributes_to_highlight: ATTRIBUTES_TO_HIGHLIGHT.iter().map(|s| s.to_string()).collect(),
        hits_per_page,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::facet_filter::{FacetFilter, FacetFilters};

    #[test]
    fn builds_index_body() {
        let query = SearchQuery { query_string: "  cirque ".to_string(), facet_filters: FacetFilters::base() };
        let params = build_index_query(&query, 2, common::search_const::PAGE_SIZE);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["query"], "cirque");
        assert_eq!(json["page"], 2);
        assert_eq!(json["hitsPerPage"], 8);
        assert_eq!(json["facetFilters"], serde_json::json!(["offer.isEducational:true"]));
        assert_eq!(json["attributesToHighlight"], serde_json::json!([]));
        assert_eq!(json["attributesToRetrieve"][0], "objectID");
    }

    #[test]
    fn base_filter_is_always_sent() {
        let query = SearchQuery {
            query_string: String::new(),
            facet_filters: FacetFilters(vec![FacetFilter::Single("venue.id:3".to_string())]),
        };
        let params = build_index_query(&query, 0, 0);
        assert!(params.facet_filters.0[0].is_base());
        assert_eq!(params.facet_filters.len(), 2);
    }
}
