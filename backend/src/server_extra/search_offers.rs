use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use common::{search_query::SearchQuery, search_result::SearchResultOffers};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{api::search::search_for_offers, index_utils::search_index_client::SearchIndex};

pub const SEARCH_OFFERS_ROUTE: &str = "/_search_offers";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchOffersRequest {
    pub query: SearchQuery,
    pub page: u64,
}

pub async fn search_offers<I: SearchIndex>(
    State(index): State<Arc<I>>,
    Json(request): Json<SearchOffersRequest>,
) -> Result<Json<SearchResultOffers>, (StatusCode, String)> {
    info!("Searching offers: {:?} (page {})", request.query.query_string, request.page);
    match search_for_offers(index.as_ref(), request.query, request.page).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!("offer search failed: {e:#}");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

pub fn search_offers_router<I: SearchIndex + 'static>(index: Arc<I>) -> Router {
    Router::new().route(SEARCH_OFFERS_ROUTE, post(search_offers::<I>)).with_state(index)
}
