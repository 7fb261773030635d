pub mod search_api;
pub mod adage_api;
