//! Admin login form.
//!
//! Posts credentials to the remote service, stores the issued token in
//! localStorage, and navigates to the dashboard. The form is glue around
//! the session: token validity is never checked here.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::core::session;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/login.module.css");

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (in_flight, set_in_flight) = signal(false);

    // Already logged in: straight to the dashboard
    Effect::new(move || {
        if session::load().is_authenticated() {
            AppRoute::Dashboard.push();
        }
    });

    let read_input = |ev: &ev::Event| -> String {
        ev.target()
            .map(|target| target.unchecked_into::<web_sys::HtmlInputElement>().value())
            .unwrap_or_default()
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if in_flight.get_untracked() {
            return;
        }
        set_in_flight.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    session::store(&token);
                    toasts.success(messages::LOGIN_OK);
                    AppRoute::Dashboard.push();
                }
                Err(_) => toasts.error(messages::LOGIN_FAILED),
            }
            set_in_flight.set(false);
        });
    };

    view! {
        <div class=css::page>
            <div class=css::panel>
                <div class=css::badge>
                    <Icon icon=ic::SHIELD />
                </div>
                <h1 class=css::title>"Admin Login"</h1>
                <p class=css::subtitle>"Access your secure management console"</p>

                <form class=css::form on:submit=handle_submit>
                    <label class=css::label>
                        <Icon icon=ic::MAIL />
                        "Email Address"
                    </label>
                    <input
                        type="email"
                        class=css::input
                        placeholder="admin@example.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(read_input(&ev))
                        required
                    />

                    <label class=css::label>
                        <Icon icon=ic::LOCK />
                        "Password"
                    </label>
                    <input
                        type="password"
                        class=css::input
                        placeholder="••••••••"
                        prop:value=password
                        on:input=move |ev| set_password.set(read_input(&ev))
                        required
                    />

                    <button type="submit" class=css::submit disabled=in_flight>
                        {move || if in_flight.get() { "Signing In..." } else { "Sign In" }}
                        <Icon icon=ic::ARROW_RIGHT />
                    </button>
                </form>

                <p class=css::footer>"Authorized personnel only"</p>
            </div>
        </div>
    }
}
