//! Paginated asset gallery.
//!
//! The component wires [`GalleryState`] to the view: a fetch effect driven
//! by page changes (including the initial mount), the asset grid, and the
//! pager. While a fetch is in flight the stale rows are hidden behind the
//! sync indicator rather than rendered.

mod card;
mod pager;
mod state;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::has_more;
use card::AssetCard;
use pager::Pager;
pub use state::GalleryState;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = GalleryState::new(ctx.toasts);

    // Fetch on mount and on every page change.
    Effect::new(move || {
        state.page.track();
        state.sync();
    });

    // Derived, never stored: true iff the displayed page came back full.
    let has_next = Signal::derive(move || state.assets.with(|assets| has_more(assets.len())));

    view! {
        <div class=css::gallery>
            <Show
                when=move || !state.loading.get()
                fallback=|| view! {
                    <div class=css::syncing>
                        <span class=css::syncingLabel>"Syncing Library..."</span>
                    </div>
                }
            >
                <div class=css::grid>
                    <For
                        each=move || state.assets.get()
                        key=|asset| asset.id.clone()
                        children=move |asset| view! { <AssetCard asset=asset state=state /> }
                    />
                </div>
            </Show>

            <Pager state=state has_next=has_next />
        </div>
    }
}
