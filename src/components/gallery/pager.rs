//! Pagination controls for the gallery.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::state::GalleryState;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn Pager(state: GalleryState, #[prop(into)] has_next: Signal<bool>) -> impl IntoView {
    let page_number = Signal::derive(move || state.page.get().number());
    let at_first = Signal::derive(move || state.page.get().is_first());

    view! {
        <div class=css::pager>
            <button
                class=css::pagerButton
                disabled=at_first
                on:click=move |_| state.prev_page()
                aria-label="Previous page"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <div class=css::pagerIndex>
                <span class=css::pagerLabel>"Index_Sequence"</span>
                <span class=css::pagerNumber>{page_number}</span>
            </div>

            <button
                class=css::pagerButton
                disabled=move || !has_next.get()
                on:click=move |_| state.next_page()
                aria-label="Next page"
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </div>
    }
}
