//! Backend operations used by the search page.

pub mod search;
pub mod list_educational_categories;
pub mod get_venue;
