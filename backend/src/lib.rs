//! Backend library: search index access and pro API calls for the offer search page.

pub mod api;
pub mod index_utils;
pub mod server_extra;
