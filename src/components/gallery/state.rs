//! Gallery state: page synchronization and asset mutations.
//!
//! [`GalleryState`] owns the displayed page exclusively: the asset set is
//! only ever replaced by its own fetch completion, wholesale, never merged.
//! Mutations (delete, rename) never patch local state; on success they
//! trigger a re-fetch of whatever page is current at completion time.
//! Concurrent operations are fire-and-forget with respect to each other;
//! consistency is restored by the re-fetch, not by locking. In-flight
//! fetches are not cancelled on page change, so a slow stale response can
//! overwrite newer state; the shipped console has the same race.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::ToastState;
use crate::config::{messages, DELETE_CONFIRM_PROMPT, SYNC_LINGER_MS};
use crate::core::{EditSession, PageCursor};
use crate::models::Asset;
use crate::utils::dom;

/// Reactive state for the paginated asset list.
///
/// `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// Assets of the current page, server order, replaced on every fetch.
    pub assets: RwSignal<Vec<Asset>>,
    /// Current page number.
    pub page: RwSignal<PageCursor>,
    /// Whether a fetch is in flight (plus the anti-flicker linger).
    pub loading: RwSignal<bool>,
    /// The single in-place rename session, if any. Page changes do not
    /// clear it; only save and cancel do.
    pub editing: RwSignal<Option<EditSession>>,
    toasts: ToastState,
}

impl GalleryState {
    pub fn new(toasts: ToastState) -> Self {
        Self {
            assets: RwSignal::new(Vec::new()),
            page: RwSignal::new(PageCursor::first()),
            loading: RwSignal::new(false),
            editing: RwSignal::new(None),
            toasts,
        }
    }

    // ------------------------------------------------------------------
    // Synchronization
    // ------------------------------------------------------------------

    /// Re-fetch the current page.
    ///
    /// On failure the previously displayed set stays up (stale but
    /// consistent beats empty). The loading indicator stays visible for at
    /// least [`SYNC_LINGER_MS`] after the fetch resolves.
    pub fn sync(&self) {
        let state = *self;
        let page = state.page.get_untracked().number();
        state.loading.set(true);

        spawn_local(async move {
            match api::list_assets(page).await {
                Ok(batch) => state.assets.set(batch),
                Err(_) => state.toasts.error(messages::SYNC_FAILED),
            }
            TimeoutFuture::new(SYNC_LINGER_MS).await;
            state.loading.set(false);
        });
    }

    /// Step to the previous page (bounded at 1). The fetch is driven by the
    /// page-change effect in the gallery component.
    pub fn prev_page(&self) {
        self.page.update(|p| *p = p.prev());
    }

    /// Step to the next page. Never blocked client-side; the "has next"
    /// signal only disables the control.
    pub fn next_page(&self) {
        self.page.update(|p| *p = p.next());
    }

    // ------------------------------------------------------------------
    // Edit session
    // ------------------------------------------------------------------

    /// Start renaming an asset, replacing any session already open.
    pub fn begin_edit(&self, asset: &Asset) {
        self.editing
            .set(Some(EditSession::begin(&asset.id, &asset.title)));
    }

    /// Abandon the open rename session.
    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    /// Update the draft title of the open session.
    pub fn set_draft(&self, draft: String) {
        self.editing.update(|editing| {
            if let Some(session) = editing {
                session.draft = draft;
            }
        });
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Save the open rename session.
    ///
    /// Success clears the session and re-fetches the current page; failure
    /// leaves the session open so the user can retry without retyping.
    pub fn save_edit(&self) {
        let Some(session) = self.editing.get_untracked() else {
            return;
        };
        let state = *self;

        spawn_local(async move {
            match api::rename_asset(&session.id, &session.draft).await {
                Ok(()) => {
                    state.toasts.success(messages::RENAME_OK);
                    state.editing.set(None);
                    state.sync();
                }
                Err(_) => state.toasts.error(messages::RENAME_FAILED),
            }
        });
    }

    /// Delete an asset after interactive confirmation.
    ///
    /// Declining the prompt is a no-op with zero remote calls. There is no
    /// optimistic removal: the row disappears only via the re-fetch, which
    /// targets the current page number even when that leaves the last page
    /// short.
    pub fn delete(&self, id: String) {
        if !dom::confirm(DELETE_CONFIRM_PROMPT) {
            return;
        }
        let state = *self;

        spawn_local(async move {
            match api::delete_asset(&id).await {
                Ok(()) => {
                    state.toasts.success(messages::DELETE_OK);
                    state.sync();
                }
                Err(_) => state.toasts.error(messages::DELETE_FAILED),
            }
        });
    }
}
