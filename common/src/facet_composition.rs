//! Turns filter form selections into the facet filter list sent to the index.
//!
//! Options are checked before any filter string is built: a department or student
//! level must hold one value, a category must hold a non-empty list of subcategory
//! ids. A malformed option is reported as a [`FacetError`] and never reaches the index.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::facet_filter::{
    DEPARTMENT_CODE_ATTRIBUTE, FacetFilter, FacetFilters, STUDENTS_ATTRIBUTE, SUBCATEGORY_ID_ATTRIBUTE,
    VENUE_ID_ATTRIBUTE, facet_string,
};
use crate::select_option::{OptionValue, SelectOption};
use crate::venue_filter::VenueFilter;

/// Pending choices of the filter form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub departments: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub students: Vec<SelectOption>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.categories.is_empty() && self.students.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("option '{label}' for {attribute} holds a list, a single value was expected")]
    UnexpectedMultiple { attribute: &'static str, label: String },

    #[error("option '{label}' for {attribute} holds a single value, a list was expected")]
    UnexpectedSingle { attribute: &'static str, label: String },

    #[error("option '{label}' for {attribute} has an empty value")]
    EmptyValue { attribute: &'static str, label: String },

    #[error("category '{label}' has no subcategory")]
    EmptyCategory { label: String },

    #[error("invalid value {value:?} for {attribute}")]
    InvalidValue { attribute: &'static str, value: String },

    #[error("invalid venue id {0}")]
    InvalidVenueId(u64),
}

/// Builds `[base, departments?, subcategories?, students?, venue?]`.
///
/// Each selection becomes one OR-group; empty selections add nothing.
pub fn compute_filters(selection: &FilterSelection, venue_filter: Option<&VenueFilter>) -> Result<FacetFilters, FacetError> {
    let mut filters = FacetFilters::base();

    let departments = selection
        .departments
        .iter()
        .map(|option| -> Result<String, FacetError> {
            let code = single_value(DEPARTMENT_CODE_ATTRIBUTE, option)?;
            if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(FacetError::InvalidValue { attribute: DEPARTMENT_CODE_ATTRIBUTE, value: code.to_string() });
            }
            Ok(facet_string(DEPARTMENT_CODE_ATTRIBUTE, code))
        })
        .collect::<Result<Vec<_>, _>>()?;
    filters.push_group(departments);

    let mut subcategories = Vec::new();
    for option in &selection.categories {
        for id in subcategory_ids(option)? {
            subcategories.push(facet_string(SUBCATEGORY_ID_ATTRIBUTE, id));
        }
    }
    filters.push_group(subcategories);

    let students = selection
        .students
        .iter()
        .map(|option| -> Result<String, FacetError> {
            Ok(facet_string(STUDENTS_ATTRIBUTE, single_value(STUDENTS_ATTRIBUTE, option)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    filters.push_group(students);

    if let Some(venue) = venue_filter {
        filters.push(venue_facet(venue)?);
    }

    Ok(filters)
}

/// `[base]`, followed by the venue restriction when there is one.
pub fn venue_filters(venue_filter: Option<&VenueFilter>) -> Result<FacetFilters, FacetError> {
    let mut filters = FacetFilters::base();
    if let Some(venue) = venue_filter {
        filters.push(venue_facet(venue)?);
    }
    Ok(filters)
}

fn venue_facet(venue: &VenueFilter) -> Result<FacetFilter, FacetError> {
    if venue.id == 0 {
        return Err(FacetError::InvalidVenueId(venue.id));
    }
    Ok(FacetFilter::single(VENUE_ID_ATTRIBUTE, venue.id))
}

fn single_value<'a>(attribute: &'static str, option: &'a SelectOption) -> Result<&'a str, FacetError> {
    match &option.value {
        OptionValue::Single(value) => checked_value(attribute, &option.label, value),
        OptionValue::Multiple(_) => Err(FacetError::UnexpectedMultiple { attribute, label: option.label.clone() }),
    }
}

fn subcategory_ids(option: &SelectOption) -> Result<Vec<&str>, FacetError> {
    let ids = match &option.value {
        OptionValue::Multiple(ids) => ids,
        OptionValue::Single(_) => {
            return Err(FacetError::UnexpectedSingle { attribute: SUBCATEGORY_ID_ATTRIBUTE, label: option.label.clone() });
        }
    };
    if ids.is_empty() {
        return Err(FacetError::EmptyCategory { label: option.label.clone() });
    }
    ids.iter().map(|id| checked_value(SUBCATEGORY_ID_ATTRIBUTE, &option.label, id)).collect()
}

fn checked_value<'a>(attribute: &'static str, label: &str, value: &'a str) -> Result<&'a str, FacetError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FacetError::EmptyValue { attribute, label: label.to_string() });
    }
    if value.chars().any(char::is_control) {
        return Err(FacetError::InvalidValue { attribute, value: value.to_string() });
    }
    Ok(value)
}
