//! Shared search query model.

use serde::{Deserialize, Serialize};

use crate::facet_filter::FacetFilters;


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub query_string: String,
    pub facet_filters: FacetFilters,
}
