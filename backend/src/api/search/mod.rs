//! Search operations and module exports.

mod search_for_offers;
pub use search_for_offers::search_for_offers;

pub mod search_params;
