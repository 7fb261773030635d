//! Offer search screen: owns the search state and sends the queries.

use dioxus::{logger::tracing, prelude::*};

use common::{facet_composition::FilterSelection, search_state::OffersSearchState, venue_filter::VenueFilter};
use crate::{
    api::search_api::search_offers,
    components::{
        search_components::{offer_filters::OfferFilters, offers_result_list::OffersResultList, pagination::Pagination, search_box::SearchBox},
        suspend_boundary::SuspendWrapper,
    },
};

#[component]
pub fn OffersSearch(venue_filter: ReadSignal<Option<VenueFilter>>) -> Element {
    let mut state = use_signal(OffersSearchState::new);
    let mut filter_error = use_signal(|| None::<String>);

    // a new venue from the embedding page replaces whatever filters were submitted before
    use_effect(move || {
        let venue = venue_filter.read().clone();
        if let Err(e) = state.write().venue_filter_changed(venue.as_ref()) {
            filter_error.set(Some(e.to_string()));
        }
    });

    let revision = use_memo(move || state.read().revision());
    use_effect(move || {
        let _ = revision.read();
        let ticket = state.write().begin_query();
        spawn(async move {
            let response = search_offers(ticket.query.clone(), ticket.page).await;
            let applied = match response {
                Ok(results) => state.write().complete_query(&ticket, results),
                Err(e) => state.write().fail_query(&ticket, e.to_string()),
            };
            if !applied {
                tracing::debug!("dropped answer to stale query #{}", ticket.sequence);
            }
        });
    });

    let submit_filters = Callback::new(move |selection: FilterSelection| {
        let venue = venue_filter.peek().clone();
        let result = state.write().submit_filters(&selection, venue.as_ref());
        match result {
            Ok(()) => filter_error.set(None),
            Err(e) => filter_error.set(Some(e.to_string())),
        }
    });
    let set_query_string = Callback::new(move |query_string: String| {
        state.write().set_query_string(query_string);
    });
    let go_to_page = Callback::new(move |page: u64| {
        state.write().go_to_page(page);
    });

    let venue_name = venue_filter.read().as_ref().map(|venue| venue.display_name().to_string());
    let current_query_string = state.read().query_string().to_string();
    let is_loading = state.read().is_loading();
    let error = state.read().error().map(|e| e.to_string());
    let results = state.read().results().cloned();
    let page = state.read().page();
    let page_count = state.read().known_page_count();

    rsx! {
        div {
            id: "x-offers-search-root",
            class: "x-offers-search",
            if let Some(venue_name) = venue_name {
                div {
                    class: "x-venue-filter-tag",
                    "Lieu : {venue_name}"
                }
            }
            SuspendWrapper {
                OfferFilters { on_submit: submit_filters, error: filter_error() }
            }
            SearchBox { current_query_string, on_change: set_query_string }
            OffersResultList { results, is_loading, error }
            Pagination { page, page_count, on_page_change: go_to_page }
        }
    }
}
