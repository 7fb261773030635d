use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};


/// Text input refining the search on every keystroke.
#[component]
pub fn SearchBox(current_query_string: ReadSignal<String>, on_change: Callback<String>) -> Element {
    let search_oninput = move |event: Event<FormData>| {
        on_change.call(event.value());
    };
    let has_text = !current_query_string.read().is_empty();

    rsx! {
        div {
            id: "x-search-box",
            class: "x-search-box",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "search",
                placeholder: "Nom de l'offre ou du partenaire culturel",
                class: "x-search-box-input",
                value: "{current_query_string}",
                oninput: search_oninput,
            }
            if has_text {
                button {
                    class: "x-search-box-reset",
                    title: "Effacer la recherche",
                    onclick: move |_| {
                        on_change.call(String::new());
                    },
                    Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}
