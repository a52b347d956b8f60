//! Root application module.
//!
//! Contains the main App component, AppContext definition, ToastState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::toast::ToastTray;
use crate::config::TOAST_DISMISS_MS;
use crate::models::{Toast, ToastKind};

// ============================================================================
// ToastState
// ============================================================================

/// Transient notification state managed with Leptos signals.
///
/// Every operation outcome in the console is reported through this surface:
/// a success confirmation or a fixed failure message per operation kind.
/// Toasts auto-dismiss after [`TOAST_DISMISS_MS`] and can be dismissed by
/// hand.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ToastState {
    /// Currently visible toasts, oldest first.
    pub toasts: RwSignal<Vec<Toast>>,
    /// Monotonic id source for render keys and targeted dismissal.
    next_id: RwSignal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Report a successful operation.
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Report a failed operation.
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Remove a toast by id. A stale id (already auto-dismissed) is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast::new(id, kind, message)));

        // Auto-dismiss after the display window
        let state = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            state.dismiss(id);
        });
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// Session state deliberately lives in localStorage rather than here: the
/// route guard re-reads token presence on every route evaluation, exactly
/// like the shipped console. Page and edit-session state are scoped to the
/// gallery component, not global.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Notification surface shared by every operation.
    pub toasts: ToastState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: ToastState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router plus the toast tray overlay
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #fafafa;
                    color: #18181b;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #71717a; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f4f4f5;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #71717a;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| crate::utils::dom::reload()
                            style="
                                background: #18181b;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
            <ToastTray />
        </ErrorBoundary>
    }
}
