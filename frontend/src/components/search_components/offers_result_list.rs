//! Result list of the offer search.

use dioxus::prelude::*;
use common::search_result::SearchResultOffers;

use crate::components::{
    error_boundary::ComponentErrorDisplay,
    search_components::offer_card::OfferCard,
    suspend_boundary::LoadingIndicator,
};


#[component]
pub fn OffersResultList(results: ReadSignal<Option<SearchResultOffers>>, is_loading: ReadSignal<bool>, error: ReadSignal<Option<String>>) -> Element {
    let results = results.read().clone();
    let is_loading = is_loading();

    rsx! {
        div {
            id: "x-offers-result-list",
            class: "x-offers-result-list",
            if let Some(error) = error() {
                ComponentErrorDisplay { error_txt: format!("Une erreur est survenue lors de la recherche : {error}") }
            }
            if is_loading {
                LoadingIndicator {}
            }
            if let Some(results) = results {
                ResultsView { results }
            }
        }
    }
}

#[component]
fn ResultsView(results: ReadSignal<SearchResultOffers>) -> Element {
    let SearchResultOffers { results, hit_count, page_number, .. } = results.read().clone();
    if results.is_empty() {
        return rsx! {
            p {
                class: "x-offers-no-result",
                "Aucun résultat trouvé pour cette recherche."
            }
        };
    }
    let hit_count_txt = if hit_count > 1 { format!("{hit_count} offres") } else { format!("{hit_count} offre") };

    rsx! {
        h2 { class: "x-offers-hit-count", "{hit_count_txt}" }
        ul {
            class: "x-offers-list",
            for offer in results {
                li {
                    key: "{offer.object_id}",
                    OfferCard { offer: offer.clone(), page_number }
                }
            }
        }
    }
}
