//! Single asset card: display mode and in-place rename mode.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use super::state::GalleryState;
use crate::components::icons as ic;
use crate::models::Asset;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn AssetCard(asset: Asset, state: GalleryState) -> impl IntoView {
    let id = asset.id.clone();
    let reference = asset.reference_label();

    // This card is in edit mode iff the single session targets it.
    let is_editing = {
        let id = id.clone();
        Signal::derive(move || {
            state
                .editing
                .with(|editing| editing.as_ref().is_some_and(|s| s.targets(&id)))
        })
    };

    // Draft buffer for the rename input. Empty when another card owns the
    // session, but then this input isn't rendered anyway.
    let draft = Signal::derive(move || {
        state
            .editing
            .with(|editing| editing.as_ref().map(|s| s.draft.clone()).unwrap_or_default())
    });

    let handle_draft_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        state.set_draft(input.value());
    };

    let begin_edit = {
        let asset = asset.clone();
        move |_| state.begin_edit(&asset)
    };
    let handle_delete = {
        let id = id.clone();
        move |_| state.delete(id.clone())
    };

    view! {
        <div class=css::card>
            <div class=css::thumb>
                <img src=asset.image_url.clone() alt=asset.title.clone() />
            </div>

            <Show
                when=move || is_editing.get()
                fallback={
                    let title = asset.title.clone();
                    let reference = reference.clone();
                    let begin_edit = begin_edit.clone();
                    let handle_delete = handle_delete.clone();
                    move || view! {
                        <div class=css::meta>
                            <h3 class=css::cardTitle>{title.clone()}</h3>
                            <p class=css::reference>{reference.clone()}</p>
                            <div class=css::actions>
                                <button class=css::action on:click=begin_edit.clone()>
                                    <Icon icon=ic::EDIT />
                                    "Modify"
                                </button>
                                <button class=css::actionDanger on:click=handle_delete.clone()>
                                    <Icon icon=ic::TRASH />
                                    "Purge"
                                </button>
                            </div>
                        </div>
                    }
                }
            >
                <div class=css::editor>
                    <label class=css::editorLabel>"Rename Asset"</label>
                    <input
                        class=css::editorInput
                        prop:value=draft
                        on:input=handle_draft_input
                        autofocus=true
                    />
                    <div class=css::editorActions>
                        <button class=css::commit on:click=move |_| state.save_edit()>
                            "Commit Changes"
                        </button>
                        <button
                            class=css::cancel
                            on:click=move |_| state.cancel_edit()
                            aria-label="Cancel rename"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
