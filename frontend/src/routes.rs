use dioxus::prelude::*;

use crate::data_definitions::venue_param::VenueParam;
use crate::pages::offers_search_page::OffersSearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // `?venue=<id>` is set by the page embedding the iframe
    #[route("/?:venue")]
    OffersSearchPage { venue: VenueParam },
}
