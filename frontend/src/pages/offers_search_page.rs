use dioxus::prelude::*;

use common::venue_filter::VenueFilter;
use crate::{
    api::adage_api::get_venue,
    components::{error_boundary::ComponentErrorDisplay, search_components::offers_search::OffersSearch, suspend_boundary::SuspendWrapper},
    data_definitions::venue_param::VenueParam,
};


/// Search page of the Adage iframe. `venue` restricts the results to one venue.
#[component]
pub fn OffersSearchPage(venue: VenueParam) -> Element {
    rsx! {
        Title { "Rechercher une offre - Adage" }
        div {
            id: "x-offers-search-page",
            class: "x-page",
            h1 { class: "x-page-title", "Rechercher une offre" }
            SuspendWrapper {
                OffersSearchPageRootComponent { venue_id: venue.0 }
            }
        }
    }
}

#[component]
fn OffersSearchPageRootComponent(venue_id: ReadSignal<Option<u64>>) -> Element {
    let venue_filter = use_resource(move || {
        let venue_id = *venue_id.read();
        async move {
            match venue_id {
                Some(id) => get_venue(id).await.map(Some),
                None => Ok::<Option<VenueFilter>, ServerFnError>(None),
            }
        }
    }).suspend()?.cloned();
    let venue_filter = match venue_filter {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("Lieu introuvable : {e}") }},
        Ok(v) => v,
    };

    rsx! {
        OffersSearch { venue_filter }
    }
}
