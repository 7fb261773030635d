//! Card for one offer of the result list.

use dioxus::prelude::*;
use common::search_result::SearchResultOfferItem;

#[component]
pub fn OfferCard(offer: ReadSignal<SearchResultOfferItem>, page_number: ReadSignal<u64>) -> Element {
    let offer = offer.read().clone();
    let item_index = 1 + (*page_number.read() * common::search_const::PAGE_SIZE) + offer.result_index_in_page;
    let venue_name = offer.venue_display_name().to_string();
    let dates_label = if offer.is_template {
        Some("Offre vitrine".to_string())
    } else {
        offer.offer_dates_label()
    };

    rsx! {
        div {
            class: "x-offer-card",
            if let Some(thumb_url) = offer.offer_thumb_url.clone() {
                img { class: "x-offer-card-image", src: "{thumb_url}", alt: "" }
            } else {
                div { class: "x-offer-card-image x-offer-card-image-placeholder" }
            }
            div {
                class: "x-offer-card-body",
                span { class: "x-offer-card-index", "{item_index}." }
                h3 { class: "x-offer-card-title", "{offer.offer_name}" }
                p { class: "x-offer-card-venue", "{venue_name}" }
                if let Some(dates_label) = dates_label {
                    p { class: "x-offer-card-dates", "{dates_label}" }
                }
            }
        }
    }
}
