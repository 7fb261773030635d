//! Facet filters in the shape the search index consumes them.

use serde::{Deserialize, Serialize};

pub const IS_EDUCATIONAL_ATTRIBUTE: &str = "offer.isEducational";
pub const DEPARTMENT_CODE_ATTRIBUTE: &str = "venue.departmentCode";
pub const SUBCATEGORY_ID_ATTRIBUTE: &str = "offer.subcategoryId";
pub const STUDENTS_ATTRIBUTE: &str = "offer.students";
pub const VENUE_ID_ATTRIBUTE: &str = "venue.id";

/// Restricts every search to educational offers. Always first in a [`FacetFilters`] list.
pub const BASE_FILTER: &str = "offer.isEducational:true";

/// One entry of the filter list.
///
/// A `Single` entry must match; a `Group` matches when any of its members does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetFilter {
    Single(String),
    Group(Vec<String>),
}

impl FacetFilter {
    pub fn single(attribute: &str, value: impl std::fmt::Display) -> Self {
        FacetFilter::Single(facet_string(attribute, value))
    }

    pub fn is_base(&self) -> bool {
        matches!(self, FacetFilter::Single(s) if s == BASE_FILTER)
    }
}

pub fn facet_string(attribute: &str, value: impl std::fmt::Display) -> String {
    format!("{attribute}:{value}")
}

/// Ordered filter list. Entries are ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetFilters(pub Vec<FacetFilter>);

impl FacetFilters {
    /// The list holding only [`BASE_FILTER`].
    pub fn base() -> Self {
        FacetFilters(vec![FacetFilter::Single(BASE_FILTER.to_string())])
    }

    /// Puts [`BASE_FILTER`] in front when the list does not carry it.
    pub fn with_base(mut self) -> Self {
        if !self.0.iter().any(FacetFilter::is_base) {
            self.0.insert(0, FacetFilter::Single(BASE_FILTER.to_string()));
        }
        self
    }

    pub fn push(&mut self, filter: FacetFilter) {
        self.0.push(filter);
    }

    /// Appends `values` as one OR-group. Nothing is appended for an empty list.
    pub fn push_group(&mut self, values: Vec<String>) {
        if !values.is_empty() {
            self.0.push(FacetFilter::Group(values));
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacetFilter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FacetFilters {
    fn default() -> Self {
        Self::base()
    }
}
