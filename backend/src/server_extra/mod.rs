//! Plain HTTP routes served next to the app.

pub mod search_offers;
