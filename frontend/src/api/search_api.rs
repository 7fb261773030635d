//! Client API calls for search endpoints.

use common::{search_query::SearchQuery, search_result::SearchResultOffers};
use dioxus::prelude::*;



#[server]
pub async fn search_offers(input: SearchQuery, current_search_result_page: u64) -> Result<SearchResultOffers, ServerFnError> {
    let index = backend::index_utils::search_index_client::SearchIndexClient::from_env()
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })?;
    let x = backend::api::search::search_for_offers(&index, input, current_search_result_page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
