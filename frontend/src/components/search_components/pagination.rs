use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};


/// `page` is the page being shown or loaded; `page_count` is 0 until the current query has answered.
#[component]
pub fn Pagination(page: ReadSignal<u64>, page_count: ReadSignal<u64>, on_page_change: Callback<u64>) -> Element {
    let page = page();
    let page_count = page_count();
    if page_count <= 1 {
        return rsx! {};
    }
    let page_label = format!("Page {}/{}", page.saturating_add(1), page_count);

    rsx! {
        div {
            id: "x-pagination",
            class: "x-pagination",
            button {
                class: "x-pagination-button",
                title: "Page précédente",
                disabled: page == 0,
                onclick: move |_| {
                    on_page_change.call(page.saturating_sub(1));
                },
                Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            }
            span { class: "x-pagination-label", "{page_label}" }
            button {
                class: "x-pagination-button",
                title: "Page suivante",
                disabled: page.saturating_add(1) >= page_count,
                onclick: move |_| {
                    on_page_change.call(page.saturating_add(1));
                },
                Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
