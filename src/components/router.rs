//! Application router component.
//!
//! Handles URL-based routing with hash history and a token-presence guard.
//! Uses native hashchange events instead of leptos_router for true hash
//! routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `#/login` vs `#/`
//! - **Guard re-reads storage on every route change**: token *presence* is
//!   the whole check; a stale token surfaces as a 401 on the first API call
//!   and the request layer bounces back here
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::dashboard::Dashboard;
use crate::components::login::Login;
use crate::core::session;
use crate::models::AppRoute;

/// Main application router.
///
/// Routes:
/// - `#/login` → credential form
/// - `#/` → dashboard (requires a stored token, else shown the form)
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Guarded screen: re-evaluated on every route change, reading token
    // presence fresh from storage each time.
    let screen = Memo::new(move |_| {
        let requested = route.get();
        if requested.requires_auth() && !session::load().is_authenticated() {
            AppRoute::Login
        } else {
            requested
        }
    });

    // Keep the URL honest when the guard redirects, without polluting the
    // back-button history with the blocked page.
    Effect::new(move || {
        let shown = screen.get();
        if shown != route.get_untracked() {
            shown.replace();
        }
    });

    view! {
        <Show
            when=move || screen.get() == AppRoute::Dashboard
            fallback=|| view! { <Login /> }
        >
            <Dashboard />
        </Show>
    }
}
