//! New asset upload form.
//!
//! Title + file picker + local preview. Validation runs locally before any
//! remote call; a successful upload reloads the page so the list, the form,
//! and the preview all reset together (coarse refresh, deliberately not a
//! targeted re-fetch).
//!
//! The preview is a [`PreviewHandle`] stored in a local signal: picking a
//! new file or clearing the selection drops the previous handle, which
//! revokes its object URL. Component teardown drops whatever is left.

use std::rc::Rc;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::{validate_submission, PreviewHandle, SubmissionIssue};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

#[component]
pub fn Upload() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    let (title, set_title) = signal(String::new());
    let (uploading, set_uploading) = signal(false);
    // File and preview hold browser handles, so they live in local-storage
    // signals (not Send).
    let file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new_local(None::<Rc<PreviewHandle>>);

    // Single path for selection changes keeps the resource discipline in
    // one place: setting the preview signal drops the previous handle.
    let select_file = move |selected: Option<File>| {
        match &selected {
            Some(f) => preview.set(PreviewHandle::new(f).map(Rc::new)),
            None => preview.set(None),
        }
        file.set(selected);
    };

    let handle_file_change = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        select_file(input.files().and_then(|files| files.get(0)));
    };

    let handle_title_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_title.set(input.value());
    };

    let handle_upload = move |_: ev::MouseEvent| {
        let selected = file.get_untracked();
        if let Err(issue) = validate_submission(&title.get_untracked(), selected.is_some()) {
            toasts.error(match issue {
                SubmissionIssue::MissingFile => messages::MISSING_FILE,
                SubmissionIssue::MissingTitle => messages::MISSING_TITLE,
            });
            return;
        }
        let Some(selected) = selected else { return };

        set_uploading.set(true);
        let asset_title = title.get_untracked();
        spawn_local(async move {
            match api::create_asset(&asset_title, &selected).await {
                Ok(()) => {
                    toasts.success(messages::UPLOAD_OK);
                    // Full reload keeps the list consistent and discards all
                    // form state, preview included.
                    dom::reload();
                }
                // Selection and preview stay put so the user can retry
                // without reselecting the file.
                Err(_) => toasts.error(messages::UPLOAD_FAILED),
            }
            set_uploading.set(false);
        });
    };

    let file_label = move || {
        file.with(|f| {
            f.as_ref()
                .map(|f| f.name())
                .unwrap_or_else(|| "Select file from local directory...".to_string())
        })
    };

    view! {
        <div class=css::panel>
            <div class=css::heading>
                <span class=css::headingIcon>
                    <Icon icon=ic::IMAGE_PLUS />
                </span>
                <div>
                    <h2 class=css::headingTitle>"Studio Archive / New Entry"</h2>
                    <p class=css::headingSub>"Asset Deployment Interface"</p>
                </div>
            </div>

            <div class=css::field>
                <label class=css::label>"Asset Title"</label>
                <input
                    type="text"
                    class=css::titleInput
                    placeholder="Enter asset title..."
                    prop:value=title
                    on:input=handle_title_input
                />
            </div>

            <div class=css::field>
                <label class=css::label>
                    <Icon icon=ic::UPLOAD />
                    "Media Source"
                </label>
                <label class=css::filePicker>
                    <input
                        type="file"
                        accept="image/*"
                        class=css::fileInput
                        on:change=handle_file_change
                    />
                    <span class=css::fileName>{file_label}</span>
                    <span class=css::browse>"Browse"</span>
                </label>
            </div>

            <div class=css::previewFrame>
                <Show
                    when=move || preview.with(|p| p.is_some())
                    fallback=|| view! {
                        <div class=css::previewEmpty>
                            <Icon icon=ic::IMAGE />
                            <p>"Waiting for media"</p>
                        </div>
                    }
                >
                    <div class=css::previewLive>
                        <img
                            class=css::previewImage
                            src=move || preview.with(|p| {
                                p.as_ref().map(|h| h.url().to_string()).unwrap_or_default()
                            })
                            alt="Preview"
                        />
                        <button
                            class=css::previewClear
                            on:click=move |_| select_file(None)
                            aria-label="Clear selection"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </Show>
            </div>

            <button class=css::submit disabled=uploading on:click=handle_upload>
                <Icon icon=ic::UPLOAD />
                {move || if uploading.get() { "Processing..." } else { "Publish Asset" }}
            </button>
        </div>
    }
}
