//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;
        use backend::{index_utils::search_index_client::SearchIndexClient, server_extra::search_offers::search_offers_router};

        let index = SearchIndexClient::from_env()?;
        Ok(dioxus::server::router(App).merge(search_offers_router(Arc::new(index))))
    });
}
