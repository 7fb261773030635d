//! Client API calls for the pro API data the search page needs.

use common::{select_option::SelectOption, venue_filter::VenueFilter};
use dioxus::prelude::*;


#[server]
pub async fn list_educational_categories() -> Result<Vec<SelectOption>, ServerFnError> {
    let api = backend::index_utils::pro_api_client::ProApiClient::from_env();
    let x = backend::api::list_educational_categories::list_educational_categories(&api).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_venue(venue_id: u64) -> Result<VenueFilter, ServerFnError> {
    let api = backend::index_utils::pro_api_client::ProApiClient::from_env();
    let x = backend::api::get_venue::get_venue(&api, venue_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
