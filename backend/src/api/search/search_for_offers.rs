//! Search endpoint for offer result pages.

use common::{
    search_const::PAGE_SIZE,
    search_query::SearchQuery,
    search_result::{SearchResultOfferItem, SearchResultOffers},
};
use serde::{Deserialize, Serialize};

use crate::api::search::search_params::build_index_query;
use crate::index_utils::search_index_client::{SearchIndex, search_index};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchForOffersHit {
    #[serde(rename = "objectID")]
    object_id: String,
    #[serde(default)]
    offer: SearchForOffersHitOffer,
    #[serde(default)]
    venue: SearchForOffersHitVenue,
    #[serde(default)]
    is_template: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SearchForOffersHitOffer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    dates: Vec<f64>,
    thumb_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SearchForOffersHitVenue {
    #[serde(default)]
    name: String,
    public_name: Option<String>,
}

pub async fn search_for_offers(index: &impl SearchIndex, query: SearchQuery, current_search_result_page: u64) -> anyhow::Result<SearchResultOffers> {
    let params = build_index_query(&query, current_search_result_page, PAGE_SIZE);
    let response = search_index::<SearchForOffersHit>(index, &params).await?;

    let results = response
        .hits
        .into_iter()
        .enumerate()
        .map(|(hit_index_in_page, hit)| SearchResultOfferItem {
            object_id: hit.object_id,
            offer_name: hit.offer.name,
            offer_dates: hit.offer.dates.into_iter().map(|d| d as i64).collect(),
            offer_thumb_url: hit.offer.thumb_url,
            venue_name: hit.venue.name,
            venue_public_name: hit.venue.public_name,
            is_template: hit.is_template,
            result_index_in_page: hit_index_in_page as u64,
        })
        .collect::<Vec<_>>();

    Ok(SearchResultOffers {
        query: SearchQuery { query_string: params.query, facet_filters: params.facet_filters },
        results,
        page_number: response.page,
        page_count: response.nb_pages,
        hit_count: response.nb_hits,
    })
}
