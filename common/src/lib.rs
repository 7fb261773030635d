//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod search_state;
pub mod facet_filter;
pub mod facet_composition;
pub mod select_option;
pub mod venue_filter;
